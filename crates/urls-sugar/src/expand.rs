/// Pattern expansion
///
/// Turns an element tree into every anchored regex it can stand for.
/// All functions are **pure**: same input → same output, no side effects.

use tracing::trace;

use crate::element::Element;

/// A partial path: one wrapped fragment per mandatory element so far
type Variant = Vec<String>;

/// Expands elements into one anchored regex per optional combination
///
/// Output is in structural order: for each optional group the variant
/// without it comes before the variants containing it. Routers try patterns
/// first to last, so registration reverses this list (see
/// [`UrlSugar::regexps`](crate::UrlSugar::regexps)).
///
/// Patterns are assembled, never validated: a malformed `regexp` surfaces
/// when the host router compiles it.
///
/// # Examples
///
/// ```
/// use urls_sugar::{constant, expand, optional, variable};
///
/// assert_eq!(expand(&[constant("home")]), vec!["^home/$"]);
/// assert_eq!(expand(&[variable("id", "[0-9]+")]), vec!["^(?P<id>[0-9]+)/$"]);
/// assert_eq!(expand(&[optional([constant("edit")])]), vec!["^$", "^edit/$"]);
/// ```
pub fn expand(elements: &[Element]) -> Vec<String> {
    let regexps: Vec<String> = generate(elements)
        .into_iter()
        .map(|variant| format!("^{}$", variant.concat()))
        .collect();

    trace!(count = regexps.len(), "expanded url elements");
    regexps
}

/// Recursive support: partial variants for a sequence of elements
///
/// The accumulator starts with a single empty variant. Leaves replace every
/// variant with its product over the leaf's fragments (mandatory); optionals
/// keep the existing variants and append their product with the group's own
/// variants.
fn generate(elements: &[Element]) -> Vec<Variant> {
    let mut variants: Vec<Variant> = vec![Vec::new()];

    for element in elements {
        match element {
            Element::Optional(group) => {
                let inner = generate(group.children());
                let with_group: Vec<Variant> = variants
                    .iter()
                    .flat_map(|outer| inner.iter().map(move |tail| join(outer, tail)))
                    .collect();
                variants.extend(with_group);
            }
            Element::Constant(_) | Element::Variable(_) => {
                let fragments = element
                    .to_regexp()
                    .map(|f| f.into_vec())
                    .unwrap_or_default();
                variants = variants
                    .iter()
                    .flat_map(|outer| {
                        fragments.iter().map(move |fragment| {
                            let mut next = outer.clone();
                            next.push(format!("{}{}{}", element.prefix(), fragment, element.suffix()));
                            next
                        })
                    })
                    .collect();
            }
        }
    }

    variants
}

fn join(head: &[String], tail: &[String]) -> Variant {
    head.iter().chain(tail).cloned().collect()
}
