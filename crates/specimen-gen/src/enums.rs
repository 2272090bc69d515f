use serde_json::Value;

/// Pick the most contextually plausible member of an enumerated value set.
///
/// A declared default wins outright and is returned verbatim. Otherwise the
/// members are lower-cased and matched as substrings against the enclosing
/// schema's reference name first, then against the operation description;
/// ties break by declaration order. With no match the first member is
/// returned. All non-default paths return the lower-cased form.
///
/// Returns `None` only for an empty value set.
pub(crate) fn resolve_enum(
    values: &[Value],
    default: Option<&Value>,
    parent_reference: Option<&str>,
    operation_description: Option<&str>,
) -> Option<Value> {
    if let Some(default) = default {
        return Some(default.clone());
    }

    let candidates: Vec<Value> = values.iter().map(lowered).collect();

    if let Some(reference) = parent_reference {
        let reference = reference.to_lowercase();
        if let Some(hit) = find_contained(&candidates, &reference) {
            return Some(hit.clone());
        }
    }

    if let Some(description) = operation_description {
        let description = description.to_lowercase();
        if let Some(hit) = find_contained(&candidates, &description) {
            return Some(hit.clone());
        }
    }

    candidates.into_iter().next()
}

/// First candidate whose textual form appears inside `haystack`, in
/// declaration order. Non-string members never match.
fn find_contained<'a>(candidates: &'a [Value], haystack: &str) -> Option<&'a Value> {
    candidates.iter().find(|candidate| {
        candidate
            .as_str()
            .is_some_and(|text| haystack.contains(text))
    })
}

fn lowered(value: &Value) -> Value {
    match value {
        Value::String(text) => Value::String(text.to_lowercase()),
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::resolve_enum;

    #[test]
    fn default_bypasses_heuristics() {
        let values = vec![json!("Cat"), json!("Dog")];
        let default = json!("Dog");
        let picked = resolve_enum(
            &values,
            Some(&default),
            Some("#/definitions/CatShelter"),
            None,
        );
        assert_eq!(picked, Some(json!("Dog")));
    }

    #[test]
    fn parent_reference_beats_description() {
        let values = vec![json!("Cat"), json!("Dog")];
        let picked = resolve_enum(
            &values,
            None,
            Some("#/definitions/DogBreed"),
            Some("all about cats"),
        );
        assert_eq!(picked, Some(json!("dog")));
    }

    #[test]
    fn description_match_when_reference_misses() {
        let values = vec![json!("Asc"), json!("Desc")];
        let picked = resolve_enum(
            &values,
            None,
            Some("#/definitions/SortOrder"),
            Some("Results are returned in desc order"),
        );
        assert_eq!(picked, Some(json!("desc")));
    }

    #[test]
    fn falls_back_to_first_member_lower_cased() {
        let values = vec![json!("Pending"), json!("Shipped")];
        let picked = resolve_enum(&values, None, None, None);
        assert_eq!(picked, Some(json!("pending")));
    }

    #[test]
    fn empty_set_yields_nothing() {
        assert_eq!(resolve_enum(&[], None, None, None), None);
    }
}
