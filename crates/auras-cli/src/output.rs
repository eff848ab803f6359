use serde::Serialize;

use crate::cli::OutputFormat;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn raw_is_single_line() {
        let value = json!({"id": "t-1", "tags": ["a", "b"]});
        assert_eq!(
            render(&value, OutputFormat::Raw).unwrap(),
            r#"{"id":"t-1","tags":["a","b"]}"#
        );
    }

    #[test]
    fn json_is_pretty() {
        let rendered = render(&json!({"ok": true}), OutputFormat::Json).unwrap();
        assert_eq!(rendered, "{\n  \"ok\": true\n}");
    }
}
