use super::*;
use std::sync::{Mutex, MutexGuard};

/// Serializes tests that touch process-wide env vars.
static ENV_LOCK: Mutex<()> = Mutex::new(());

fn env_guard() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// # Safety
/// Callers must hold `env_guard()`.
unsafe fn clear_server_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("BIND_ADDR");
        std::env::remove_var("WORKER_REGISTRY_PATH");
        std::env::remove_var("CHECKLIST_CONFIG_PATH");
    }
}

#[test]
fn from_env_defaults() {
    let _env = env_guard();
    unsafe { clear_server_env() };

    let cfg = AppConfig::from_env().unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR);
    assert_eq!(cfg.registry_path, None);
    assert_eq!(cfg.checklist_path, None);
    assert_eq!(cfg.listen_addr(), "0.0.0.0:3000");
}

#[test]
fn from_env_parses_overrides() {
    let _env = env_guard();
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", "8080");
        std::env::set_var("BIND_ADDR", "127.0.0.1");
        std::env::set_var("WORKER_REGISTRY_PATH", "/etc/aserradero/workers.yaml");
        std::env::set_var("CHECKLIST_CONFIG_PATH", "  ");
    }

    let cfg = AppConfig::from_env().unwrap();
    assert_eq!(cfg.listen_addr(), "127.0.0.1:8080");
    assert_eq!(cfg.registry_path, Some(PathBuf::from("/etc/aserradero/workers.yaml")));
    assert_eq!(cfg.checklist_path, None);

    unsafe { clear_server_env() };
}

#[test]
fn from_env_invalid_port_errors() {
    let _env = env_guard();
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", "not-a-port");
    }

    let err = AppConfig::from_env().unwrap_err().to_string();
    assert!(err.contains("invalid PORT"));

    unsafe { clear_server_env() };
}

#[test]
fn panel_defaults_are_fixed_figures() {
    let panel = PanelConfig::default();
    assert_eq!(panel.compliance_percent, 92);
    assert_eq!(panel.compliance_delta, 4);
    assert!(panel.advisory.contains("DS 44"));
}
