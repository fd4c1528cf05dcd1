use crate::models::FontRecord;

/// Directory the generated `url(...)` sources point into, relative to the stylesheet
pub const FONT_URL_DIR: &str = "../font";

/// Render one `@font-face` rule, terminated by a newline
pub fn render_font_face(record: &FontRecord) -> String {
    format!(
        "@font-face {{\n\
         \tfont-family: '{family}';\n\
         \tfont-style: {style};\n\
         \tfont-weight: {weight};\n\
         \tfont-display: swap;\n\
         \tsrc: local(''),\n\
         \turl(\"{dir}/{file}.woff2\") format(\"woff2\"),\n\
         \turl(\"{dir}/{file}.woff\") format(\"woff\");\n\
         }}\n",
        family = record.family,
        style = record.style,
        weight = record.weight,
        dir = FONT_URL_DIR,
        file = record.file_name,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FontStyle;

    #[test]
    fn test_render_font_face() {
        let record = FontRecord {
            family: "Roboto".to_string(),
            style: FontStyle::Italic,
            weight: 700,
            file_name: "Roboto-BoldItalic".to_string(),
        };

        let expected = "@font-face {\n\
            \tfont-family: 'Roboto';\n\
            \tfont-style: italic;\n\
            \tfont-weight: 700;\n\
            \tfont-display: swap;\n\
            \tsrc: local(''),\n\
            \turl(\"../font/Roboto-BoldItalic.woff2\") format(\"woff2\"),\n\
            \turl(\"../font/Roboto-BoldItalic.woff\") format(\"woff\");\n\
            }\n";
        assert_eq!(render_font_face(&record), expected);
    }
}
