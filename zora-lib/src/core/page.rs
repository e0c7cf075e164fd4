//! Server-rendered markup of the lookup page.
//!
//! The form posts back to `/` with a single `address` field, so pressing
//! Enter in the input and clicking the button are the same lookup action.
//! A small inline script clears stale panels on edit and shows the busy
//! state between submit and the settled page.

use crate::helpers::escape_html;

use super::lookup::{LookupView, Panel};

const STYLE: &str = r#"
  body { font-family: system-ui, sans-serif; background: #f5f5f7; margin: 0; }
  .container { min-height: 100vh; display: flex; justify-content: center; align-items: center; }
  .main { background: #fff; padding: 2rem 2.5rem; border-radius: 12px; max-width: 560px; width: 100%; }
  .title { margin: 0 0 .5rem; }
  .input-group { display: flex; gap: .5rem; }
  .input-field { flex: 1; padding: .6rem; font-family: monospace; }
  .button { padding: .6rem 1.2rem; cursor: pointer; }
  .error-message { color: #b00020; }
  .token-amount { font-size: 2rem; font-weight: 600; margin: 0; }
"#;

// Enter submits through requestSubmit so an empty input still reaches
// validation while the button is disabled.
const SCRIPT: &str = r#"
  function lookupEdited(input) {
    document.querySelectorAll(".error-message, .result-section").forEach(function (el) {
      el.remove();
    });
    input.form.querySelector(".button").disabled = input.value.trim() === "";
  }
  function lookupKey(event, input) {
    if (event.key === "Enter") {
      event.preventDefault();
      input.form.requestSubmit();
    }
  }
  function lookupSubmit(form) {
    var input = form.querySelector(".input-field");
    var button = form.querySelector(".button");
    if (input.readOnly) {
      return false;
    }
    input.readOnly = true;
    button.disabled = true;
    button.textContent = button.dataset.busyLabel;
    return true;
  }
"#;

pub fn render_page(view: &LookupView<'_>) -> String {
    let messages = view.locale.messages();
    let readonly = if view.busy { " readonly" } else { "" };
    let disabled = if view.can_submit { "" } else { " disabled" };
    let button_label = if view.busy {
        messages.button_busy
    } else {
        messages.button_idle
    };

    let panel = match &view.panel {
        Panel::None => String::new(),
        Panel::Error(message) => format!(
            r#"<p class="error-message">{} {}</p>"#,
            escape_html(messages.error_prefix),
            escape_html(message)
        ),
        Panel::Result(amount) => format!(
            r#"<div class="result-section"><h2>{}</h2><p class="token-amount">{}</p></div>"#,
            escape_html(messages.result_heading),
            escape_html(amount)
        ),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>{style}</style>
</head>
<body>
<div class="container">
<main class="main">
<h1 class="title">{title}</h1>
<p class="description">{description}</p>
<form class="input-group" method="post" action="/" onsubmit="return lookupSubmit(this)">
<input type="text" name="address" value="{address}" placeholder="{placeholder}" class="input-field" autocomplete="off" autofocus oninput="lookupEdited(this)" onkeydown="lookupKey(event, this)"{readonly}>
<button type="submit" class="button" data-busy-label="{busy_label}"{disabled}>{button_label}</button>
</form>
{panel}
</main>
</div>
<script>{script}</script>
</body>
</html>
"#,
        lang = view.locale.tag(),
        title = escape_html(messages.title),
        style = STYLE,
        description = escape_html(messages.description),
        address = escape_html(view.address),
        placeholder = escape_html(messages.placeholder),
        readonly = readonly,
        disabled = disabled,
        busy_label = escape_html(messages.button_busy),
        script = SCRIPT,
        button_label = escape_html(button_label),
        panel = panel,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::locale::Locale;

    fn view(panel: Panel, busy: bool) -> LookupView<'static> {
        LookupView {
            locale: Locale::Tr,
            address: "0x<script>",
            busy,
            can_submit: !busy,
            panel,
        }
    }

    #[test]
    fn idle_page_has_form_and_no_panels() {
        let html = render_page(&view(Panel::None, false));

        assert!(html.contains(r#"<html lang="tr">"#));
        assert!(html.contains(r#"class="button" data-busy-label="Sorgulanıyor...">Sorgula</button>"#));
        assert!(!html.contains(r#"<p class="error-message">"#));
        assert!(!html.contains(r#"<div class="result-section">"#));
        assert!(!html.contains(" readonly"));
    }

    #[test]
    fn blank_input_disables_button_only() {
        let html = render_page(&LookupView::idle(Locale::En));

        assert!(html.contains(r#"data-busy-label="Looking up..." disabled>Look up</button>"#));
        assert!(html.contains(r#"onkeydown="lookupKey(event, this)">"#));
    }

    #[test]
    fn busy_page_locks_controls() {
        let html = render_page(&view(Panel::None, true));

        assert!(html.contains(">Sorgulanıyor...</button>"));
        assert!(html.contains(r#"onkeydown="lookupKey(event, this)" readonly>"#));
        assert!(html.contains(r#"data-busy-label="Sorgulanıyor..." disabled>"#));
    }

    #[test]
    fn page_carries_edit_and_submit_hooks() {
        let html = render_page(&view(Panel::Result("42".to_string()), false));

        assert!(html.contains(r#"oninput="lookupEdited(this)""#));
        assert!(html.contains(r#"onsubmit="return lookupSubmit(this)""#));
        assert!(html.contains("function lookupEdited(input)"));
        assert!(html.contains(r#"querySelectorAll(".error-message, .result-section")"#));
        assert!(html.contains("button.textContent = button.dataset.busyLabel;"));
    }

    #[test]
    fn error_panel_is_prefixed_and_escaped() {
        let html = render_page(&view(Panel::Error("<boom>".to_string()), false));

        assert!(html.contains(r#"<p class="error-message">Hata: &lt;boom&gt;</p>"#));
        assert!(!html.contains(r#"<div class="result-section">"#));
        assert!(html.contains(r#"value="0x&lt;script&gt;""#));
    }

    #[test]
    fn result_panel_shows_amount() {
        let html = render_page(&view(Panel::Result("1.234,5".to_string()), false));

        assert!(html.contains("Toplam Kazanılan Token:"));
        assert!(html.contains(r#"<p class="token-amount">1.234,5</p>"#));
        assert!(!html.contains(r#"<p class="error-message">"#));
    }
}
