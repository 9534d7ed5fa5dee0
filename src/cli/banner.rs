use figlet_rs::FIGfont;

use crate::cli::gradient::PASTEL;
use crate::error::{BloxError, Result};

/// Text shown in the closing banner
pub fn celebration_lines(project_name: &str) -> Vec<String> {
    vec![
        format!("Congrats , {} !", project_name),
        "$ 1 , 0 0 0 , 0 0 0".to_string(),
    ]
}

/// Render each line with the standard FIGlet font, stacked vertically
pub fn render_figlet(lines: &[String]) -> Result<String> {
    let font = FIGfont::standard().map_err(|e| BloxError::Render {
        message: format!("loading standard font: {}", e),
    })?;

    let mut rendered = Vec::with_capacity(lines.len());
    for line in lines {
        let figure = font.convert(line).ok_or_else(|| BloxError::Render {
            message: format!("no glyphs for '{}'", line),
        })?;
        rendered.push(figure.to_string());
    }

    Ok(rendered.join("\n"))
}

/// Closing banner for `project_name`; plain text when FIGlet can't render it
pub fn render_celebration(project_name: &str, colored: bool) -> String {
    let lines = celebration_lines(project_name);
    let art = render_figlet(&lines).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "falling back to plain banner");
        lines.join("\n")
    });

    if colored {
        PASTEL.multiline(&art)
    } else {
        art
    }
}
