//! Direct access to the textarea for caret and focus handling
//!
//! Selection offsets cross the boundary as `char` counts; the scripts convert
//! to and from the UTF-16 offsets the DOM uses.

use dioxus::prelude::*;
use mdpad_core::editor::TextBuffer;

pub const EDITOR_ID: &str = "markdown-editor";

/// Read the editor's selection as `char` offsets
pub async fn read_selection() -> Result<(usize, usize), String> {
    let script = format!(
        r"
        const el = document.getElementById('{EDITOR_ID}');
        if (!el) {{ return [0, 0]; }}
        const chars = (n) => Array.from(el.value.slice(0, n)).length;
        return [chars(el.selectionStart), chars(el.selectionEnd)];
        "
    );
    document::eval(&script)
        .join()
        .await
        .map_err(|error| format!("Failed to read editor selection: {error}"))
}

/// Write the value and selection straight into the textarea
pub fn write_buffer(buffer: &TextBuffer) {
    let _ = document::eval(&write_buffer_script(buffer));
}

pub fn focus_editor() {
    let _ = document::eval(&format!(
        "document.getElementById('{EDITOR_ID}')?.focus();"
    ));
}

fn write_buffer_script(buffer: &TextBuffer) -> String {
    let text = serde_json::to_string(&buffer.text).unwrap_or_else(|_| "\"\"".to_string());
    format!(
        r"
        const el = document.getElementById('{EDITOR_ID}');
        if (el) {{
            const text = {text};
            const units = (n) => Array.from(text).slice(0, n).join('').length;
            el.value = text;
            el.setSelectionRange(units({start}), units({end}));
        }}
        ",
        start = buffer.selection_start,
        end = buffer.selection_end,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_script_escapes_text() {
        let buffer = TextBuffer::with_caret("say \"hi\"\n</script>", 3);
        let script = write_buffer_script(&buffer);
        assert!(script.contains(r#"const text = "say \"hi\"\n</script>";"#));
        assert!(script.contains("units(3), units(3)"));
    }
}
