//! Server-side HTML rendering of view models.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages are plain Leptos `view!` templates rendered to a string per request.
//! There is no hydration and no client bundle; forms post back to the
//! server and the response is a freshly rendered page.

use leptos::prelude::*;

use crate::views::field::FieldChecklistModel;
use crate::views::inspection::InspectionReportModel;
use crate::views::panel::ControlPanelModel;
use crate::views::{Page, ViewModel};

const TITLE: &str = "Aserradero · Cumplimiento DS 44/2024";

const STYLE: &str = "
body { margin: 0; font-family: system-ui, sans-serif; display: flex; min-height: 100vh; color: #1f2933; }
nav { width: 14rem; background: #243b53; padding: 1rem; }
nav h2 { color: #f0f4f8; font-size: 1rem; }
nav a { display: block; color: #bcccdc; padding: 0.5rem; text-decoration: none; border-radius: 4px; }
nav a.active { background: #486581; color: #ffffff; }
main { flex: 1; padding: 1.5rem 2rem; }
.metrics { display: flex; gap: 1rem; margin-bottom: 1.5rem; }
.metric { border: 1px solid #d9e2ec; border-radius: 6px; padding: 0.75rem 1rem; min-width: 10rem; }
.metric .value { font-size: 1.6rem; font-weight: 600; }
.metric .delta { color: #2f8132; }
.advisory { background: #fff3c4; }
table { border-collapse: collapse; width: 100%; }
th, td { border-bottom: 1px solid #d9e2ec; padding: 0.5rem; text-align: left; }
.checklist label { display: block; margin: 0.4rem 0; }
textarea { width: 100%; min-height: 5rem; }
.success { background: #e3f9e5; border: 1px solid #57ae5b; padding: 0.75rem; border-radius: 6px; }
.info { background: #dceefb; padding: 0.75rem; border-radius: 6px; }
";

/// Render a full HTML document for `model`.
#[must_use]
pub fn render_document(model: ViewModel) -> String {
    let active = model.page();
    let body = match model {
        ViewModel::ControlPanel(m) => control_panel(m).into_any(),
        ViewModel::FieldChecklist(m) => field_checklist(m).into_any(),
        ViewModel::InspectionReport(m) => inspection_report(m).into_any(),
    };

    let document = view! {
        <html lang="es">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>{TITLE}</title>
                <style>{STYLE}</style>
            </head>
            <body>
                {navigation(active)}
                <main>{body}</main>
            </body>
        </html>
    };

    format!("<!DOCTYPE html>{}", document.to_html())
}

fn navigation(active: Page) -> impl IntoView {
    let links = Page::ALL
        .into_iter()
        .map(|page| {
            let class = if page == active { "active" } else { "" };
            view! { <a href={page.href()} class=class>{page.label()}</a> }
        })
        .collect_view();

    view! {
        <nav>
            <h2>"Aserradero DS 44"</h2>
            {links}
        </nav>
    }
}

fn control_panel(model: ControlPanelModel) -> impl IntoView {
    let delta = model.delta_display();
    let rows = model
        .workers
        .into_iter()
        .map(|w| {
            view! {
                <tr>
                    <td>{w.name}</td>
                    <td>{w.role}</td>
                    <td>{w.national_id}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <h1>"Panel de Control"</h1>
        <div class="metrics">
            <div class="metric">
                <div>"Trabajadores registrados"</div>
                <div class="value worker-count">{model.worker_count.to_string()}</div>
            </div>
            <div class="metric">
                <div>"Cumplimiento DS 44"</div>
                <div class="value">{format!("{}%", model.compliance_percent)}</div>
                <div class="delta">{delta}</div>
            </div>
            <div class="metric advisory">
                <div>"Advertencia"</div>
                <div>{model.advisory}</div>
            </div>
        </div>
        <table class="workers">
            <thead>
                <tr>
                    <th>"Nombre"</th>
                    <th>"Cargo"</th>
                    <th>"RUT"</th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
}

fn field_checklist(model: FieldChecklistModel) -> impl IntoView {
    let selected = model.selected_worker;
    let options = model
        .worker_options
        .into_iter()
        .map(|name| {
            let is_selected = selected.as_deref() == Some(name.as_str());
            let value = name.clone();
            view! { <option value={value} selected=is_selected>{name}</option> }
        })
        .collect_view();

    let toggles = model
        .items
        .into_iter()
        .map(|item| {
            view! {
                <label>
                    <input type="checkbox" name={item.id}/>
                    <span>{item.label}</span>
                </label>
            }
        })
        .collect_view();

    let confirmation = model.acknowledgment.map(|ack| {
        view! {
            <div class="success">
                <p>{ack.message}</p>
                <small>{format!("Comprobante {}", ack.receipt)}</small>
            </div>
        }
    });

    view! {
        <h1>"App Terreno"</h1>
        <p>"Checklist diario de seguridad para operadores en faena."</p>
        {confirmation}
        <form method="post" action={Page::FieldChecklist.href()} class="checklist">
            <label>
                "Trabajador"
                <select name="worker">{options}</select>
            </label>
            {toggles}
            <label>
                "Observaciones / incidentes"
                <textarea name="notes"></textarea>
            </label>
            <button type="submit">"Enviar checklist"</button>
        </form>
    }
}

fn inspection_report(model: InspectionReportModel) -> impl IntoView {
    view! {
        <h1>"Fiscalización"</h1>
        <div class="info">{model.message}</div>
        <form method="post" action={model.action}>
            <button type="submit">{model.button_label}</button>
        </form>
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
