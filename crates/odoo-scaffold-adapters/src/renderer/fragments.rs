//! Generated template fragments.
//!
//! Every fragment that lists states or transitions is built from
//! [`State::ALL`] and [`Transition::ALL`], so the model, the form header and
//! the search filters always describe the same lifecycle.

use odoo_scaffold_core::domain::{DerivedNames, ModuleOptions, STATE_FIELD, State, Transition};

use super::templates::{ACCESS_FILE, MENU_FILE, SECURITY_FILE};

const LIST_ITEM_INDENT: &str = "        ";

/// Body of a single-quoted Python string literal.
///
/// Control characters use Python escapes, so the literal stays on one line.
pub fn python_str(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", u32::from(c))),
            c => out.push(c),
        }
    }
    out
}

fn python_list_items<'a>(items: impl IntoIterator<Item = &'a str>) -> String {
    items
        .into_iter()
        .map(|item| format!("{LIST_ITEM_INDENT}'{}',", python_str(item)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `depends` entries of the manifest.
pub fn depends(options: &ModuleOptions) -> String {
    python_list_items(options.depends())
}

/// Data files in load order: groups before the access rows that use them,
/// the action before the menu that opens it.
pub fn data_files(names: &DerivedNames) -> Vec<String> {
    vec![
        SECURITY_FILE.to_string(),
        ACCESS_FILE.to_string(),
        names.views_file(),
        MENU_FILE.to_string(),
    ]
}

pub fn data_file_items(names: &DerivedNames) -> String {
    let files = data_files(names);
    python_list_items(files.iter().map(String::as_str))
}

pub fn state_selection() -> String {
    State::ALL
        .iter()
        .map(|s| format!("{LIST_ITEM_INDENT}('{}', '{}'),", s.as_str(), s.label()))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn transition_methods() -> String {
    Transition::ALL
        .iter()
        .map(|t| {
            format!(
                "    def {}(self):\n        for record in self:\n            record.{STATE_FIELD} = '{}'",
                t.method(),
                t.target().as_str()
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// One `<button>` per transition, guarded in the bundle's dialect.
pub fn header_buttons(names: &DerivedNames) -> String {
    let dialect = names.visibility_dialect;
    Transition::ALL
        .iter()
        .map(|t| {
            let class = if t.is_primary() {
                " class=\"oe_highlight\""
            } else {
                ""
            };
            format!(
                "                    <button name=\"{}\" string=\"{}\"\n                            type=\"object\"{class}\n                            {}/>",
                t.method(),
                t.label(),
                dialect.render(&t.hide_predicate())
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// States along the primary path from the initial state.
pub fn progress_states() -> Vec<State> {
    let mut path = vec![State::INITIAL];
    let mut current = State::INITIAL;
    while let Some(next) = Transition::ALL
        .iter()
        .find(|t| t.is_primary() && t.is_available_from(current))
    {
        current = next.target();
        if path.contains(&current) {
            break;
        }
        path.push(current);
    }
    path
}

pub fn statusbar_visible() -> String {
    progress_states()
        .iter()
        .map(|s| s.as_str())
        .collect::<Vec<_>>()
        .join(",")
}

/// One search filter per state on the progress path.
pub fn state_filters() -> String {
    progress_states()
        .iter()
        .map(|s| {
            format!(
                "                <filter name=\"{0}\" string=\"{1}\"\n                        domain=\"[('{STATE_FIELD}', '=', '{0}')]\"/>",
                s.as_str(),
                s.label()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn python_strings_are_escaped() {
        assert_eq!(python_str("O'Neil"), "O\\'Neil");
        assert_eq!(python_str("a\\b"), "a\\\\b");
        assert_eq!(python_str("plain"), "plain");
    }

    #[test]
    fn python_strings_stay_on_one_line() {
        assert_eq!(python_str("Jane\nDoe"), "Jane\\nDoe");
        assert_eq!(python_str("a\r\tb"), "a\\r\\tb");
        assert_eq!(python_str("bell\u{7}"), "bell\\u0007");
        assert_eq!(python_str("caf\u{e9}"), "caf\u{e9}");
    }

    #[test]
    fn progress_path_skips_cancelled() {
        assert_eq!(progress_states(), vec![State::Draft, State::Confirmed, State::Done]);
        assert_eq!(statusbar_visible(), "draft,confirmed,done");
    }

    #[test]
    fn every_transition_gets_a_method() {
        let methods = transition_methods();
        for t in Transition::ALL {
            assert!(methods.contains(&format!("def {}(self):", t.method())));
            assert!(methods.contains(&format!("record.state = '{}'", t.target())));
        }
    }

    #[test]
    fn selection_lists_all_states_in_order() {
        assert_eq!(
            state_selection(),
            "        ('draft', 'Draft'),\n        ('confirmed', 'Confirmed'),\n        ('done', 'Done'),\n        ('cancelled', 'Cancelled'),"
        );
    }
}
