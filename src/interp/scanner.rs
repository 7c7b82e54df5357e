//! Phase one: tokenize a literal's raw text into static runs and
//! `${expr[:fmt]}` interpolations. `${` is the only trigger; nested braces
//! are not supported, matching the grammar's flat `EXPR` scan. Escapes
//! (`\n`, `\t`, `\r`, `\\`, `\"`) have already been resolved by
//! `ast::literal::parse_string`, so this scanner only has to find `${...}`
//! boundaries.

#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    Static(String),
    Interp { expr: String, fmt: Option<String> },
}

pub fn scan(raw: &str) -> Vec<Fragment> {
    let mut fragments = Vec::new();
    let mut chars = raw.char_indices().peekable();
    let mut static_start = 0;

    while let Some((i, c)) = chars.peek().copied() {
        if c == '$' && raw[i..].starts_with("${") {
            if i > static_start {
                fragments.push(Fragment::Static(raw[static_start..i].to_owned()));
            }
            chars.next();
            chars.next();

            let body_start = i + 2;
            let mut depth = 0usize;
            let mut body_end = body_start;
            for (j, ch) in raw[body_start..].char_indices() {
                match ch {
                    '{' => depth += 1,
                    '}' if depth == 0 => {
                        body_end = body_start + j;
                        break;
                    }
                    '}' => depth -= 1,
                    _ => {}
                }
            }
            let body = &raw[body_start..body_end];
            let (expr, fmt) = match body.split_once(':') {
                Some((e, f)) => (e.trim().to_owned(), Some(f.trim().to_owned())),
                None => (body.trim().to_owned(), None),
            };
            fragments.push(Fragment::Interp { expr, fmt });

            let consume_until = body_end + 1;
            while let Some((k, _)) = chars.peek().copied() {
                if k >= consume_until {
                    break;
                }
                chars.next();
            }
            static_start = consume_until.min(raw.len());
        } else {
            chars.next();
        }
    }

    if static_start < raw.len() {
        fragments.push(Fragment::Static(raw[static_start..].to_owned()));
    }

    fragments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_literal_is_a_single_static_fragment() {
        assert_eq!(scan("ola mundo"), vec![Fragment::Static("ola mundo".to_owned())]);
    }

    #[test]
    fn interpolation_without_format() {
        assert_eq!(
            scan("valor: ${x}"),
            vec![
                Fragment::Static("valor: ".to_owned()),
                Fragment::Interp {
                    expr: "x".to_owned(),
                    fmt: None,
                },
            ]
        );
    }

    #[test]
    fn interpolation_with_format_splits_on_first_colon() {
        assert_eq!(
            scan("pi=${p:.2f}"),
            vec![
                Fragment::Static("pi=".to_owned()),
                Fragment::Interp {
                    expr: "p".to_owned(),
                    fmt: Some(".2f".to_owned()),
                },
            ]
        );
    }

    #[test]
    fn back_to_back_interpolations_with_no_static_between() {
        assert_eq!(
            scan("${a}${b}"),
            vec![
                Fragment::Interp {
                    expr: "a".to_owned(),
                    fmt: None,
                },
                Fragment::Interp {
                    expr: "b".to_owned(),
                    fmt: None,
                },
            ]
        );
    }

    #[test]
    fn trailing_static_text_after_interpolation() {
        assert_eq!(
            scan("${a} fim"),
            vec![
                Fragment::Interp {
                    expr: "a".to_owned(),
                    fmt: None,
                },
                Fragment::Static(" fim".to_owned()),
            ]
        );
    }
}
