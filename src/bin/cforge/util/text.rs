/// Greedy word wrap. Words longer than `width` (paths, mostly) are split
/// so no line exceeds the box they are printed in.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        for piece in chunks(word, width) {
            let needed = current.chars().count() + 1 + piece.chars().count();
            if current.is_empty() {
                current = piece.to_string();
            } else if needed <= width {
                current.push(' ');
                current.push_str(piece);
            } else {
                lines.push(std::mem::replace(&mut current, piece.to_string()));
            }
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

fn chunks(word: &str, width: usize) -> Vec<&str> {
    let mut out = Vec::new();
    let mut rest = word;
    while let Some((cut, _)) = rest.char_indices().nth(width) {
        out.push(&rest[..cut]);
        rest = &rest[cut..];
    }
    out.push(rest);
    out
}

pub fn truncate(s: &str, max_len: usize) -> String {
    match max_len {
        0 => String::new(),
        _ if s.chars().count() <= max_len => s.to_string(),
        1 => "…".to_string(),
        _ => {
            let mut out: String = s.chars().take(max_len - 1).collect();
            out.push('…');
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_fits_on_one_line() {
        assert_eq!(wrap("isotope c12 folded", 30), ["isotope c12 folded"]);
    }

    #[test]
    fn wrap_breaks_between_words() {
        assert_eq!(
            wrap("network file not found", 12),
            ["network file", "not found"]
        );
    }

    #[test]
    fn wrap_splits_long_paths() {
        assert_eq!(
            wrap("/data/net_data/nets", 8),
            ["/data/ne", "t_data/n", "ets"]
        );
    }

    #[test]
    fn wrap_empty_text_keeps_one_line() {
        assert_eq!(wrap("   ", 10), [""]);
    }

    #[test]
    fn truncate_keeps_short_names() {
        assert_eq!(truncate("fe56", 10), "fe56");
        assert_eq!(truncate("fe56", 4), "fe56");
    }

    #[test]
    fn truncate_marks_cut_text() {
        assert_eq!(truncate("approx21_cr60_plus_co56", 8), "approx2…");
        assert_eq!(truncate("Δ xq range", 3), "Δ …");
        assert_eq!(truncate("he4", 1), "…");
    }
}
