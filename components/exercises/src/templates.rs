//! Template literals: interpolated strings and generated markup.

/// The person the greeting exercise interpolates.
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    /// Full name
    pub name: String,
    /// Age in years
    pub age: u32,
}

impl Person {
    /// The demonstration person.
    pub fn sample() -> Self {
        Person {
            name: "Zodiac Hasbro".to_string(),
            age: 56,
        }
    }
}

/// Build the two interpolated greeting sentences.
pub fn make_greeting(person: &Person) -> Vec<String> {
    vec![
        format!("Hello, my name is {}!", person.name),
        format!("I am {} years old.", person.age),
    ]
}

/// One warning list item per failure string.
///
/// # Examples
///
/// ```
/// use exercises::make_list;
///
/// let items = make_list(&["no-var".to_string()]);
/// assert_eq!(items, vec!["<li class=\"text-warning\">no-var</li>"]);
/// ```
pub fn make_list(failures: &[String]) -> Vec<String> {
    failures
        .iter()
        .map(|failure| format!("<li class=\"text-warning\">{}</li>", failure))
        .collect()
}
