//! Whitespace normalization applied to every rendered file.

/// Remove the common leading indentation from all lines, then trim the result.
///
/// Lines made only of whitespace do not take part in the common-margin
/// computation and are emptied.
pub fn format_code(text: &str) -> String {
    let margin = common_margin(text);
    let dedented: Vec<&str> = text
        .split('\n')
        .map(|line| if is_blank(line) { "" } else { &line[margin.len()..] })
        .collect();
    dedented.join("\n").trim().to_string()
}

fn common_margin(text: &str) -> &str {
    let mut margin: Option<&str> = None;

    for line in text.split('\n').filter(|line| !is_blank(line)) {
        let indent = &line[..line.len() - line.trim_start_matches([' ', '\t']).len()];
        margin = Some(match margin {
            None => indent,
            Some(current) => {
                let shared =
                    current.bytes().zip(indent.bytes()).take_while(|(a, b)| a == b).count();
                &current[..shared]
            }
        });
    }

    margin.unwrap_or("")
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}
