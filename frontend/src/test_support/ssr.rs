use leptos::*;

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = leptos::create_runtime();
    let result = f();
    runtime.dispose();
    result
}

pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| view().into_view().render_to_string().to_string());
    leptos_reactive::suppress_resource_load(false);
    html
}

/// Opening tag of the first `<button>` in rendered markup.
pub fn first_button_tag(html: &str) -> Option<&str> {
    let start = html.find("<button")?;
    let rest = &html[start..];
    let end = rest.find('>')?;
    Some(&rest[..end])
}

/// Whether the first `<button>` carries a `disabled` attribute.
pub fn button_is_disabled(html: &str) -> bool {
    first_button_tag(html)
        .map(|tag| {
            tag.split_whitespace()
                .any(|token| token == "disabled" || token.starts_with("disabled="))
        })
        .unwrap_or(false)
}

/// Whether the fetched-name span is in the markup. Hydration comments carry
/// the component name, so the bare `user-name` text is not a reliable marker.
pub fn renders_user_name(html: &str) -> bool {
    html.contains("data-testid=\"user-name\"")
}

/// `value` attribute of the `<input>` with the given id.
pub fn input_value<'a>(html: &'a str, id: &str) -> Option<&'a str> {
    let marker = format!("id=\"{}\"", id);
    let input_start = html
        .match_indices("<input")
        .map(|(idx, _)| idx)
        .find(|&idx| {
            html[idx..]
                .find('>')
                .map(|end| html[idx..idx + end].contains(&marker))
                .unwrap_or(false)
        })?;
    let tag = &html[input_start..input_start + html[input_start..].find('>')?];
    let value_start = tag.find(" value=\"")? + " value=\"".len();
    let value_len = tag[value_start..].find('"')?;
    Some(&tag[value_start..value_start + value_len])
}

#[cfg(test)]
mod tests {
    use super::{button_is_disabled, input_value, renders_user_name};

    #[test]
    fn button_is_disabled_ignores_class_variants() {
        let enabled = r#"<form><button type="submit" class="disabled:opacity-50">Login</button></form>"#;
        let disabled = r#"<button type="submit" disabled class="disabled:opacity-50">Login</button>"#;
        let disabled_valued = r#"<button disabled="" type="submit">Login</button>"#;
        assert!(!button_is_disabled(enabled));
        assert!(button_is_disabled(disabled));
        assert!(button_is_disabled(disabled_valued));
        assert!(!button_is_disabled("<div>no button</div>"));
    }

    #[test]
    fn renders_user_name_ignores_hydration_markers() {
        let empty = "<!--hk=0-0-0-1o|leptos-fetched-user-name-start--><!--hk=0-0-0-1o|leptos-fetched-user-name-end-->";
        let named = r#"<span data-testid="user-name">John</span>"#;
        assert!(!renders_user_name(empty));
        assert!(renders_user_name(named));
    }

    #[test]
    fn input_value_reads_attribute_by_id() {
        let html = r#"<input id="username" type="text" value="test"/><input id="password" type="password" value=""/>"#;
        assert_eq!(input_value(html, "username"), Some("test"));
        assert_eq!(input_value(html, "password"), Some(""));
        assert_eq!(input_value(html, "missing"), None);
    }
}
