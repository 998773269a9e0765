use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cell::RefCell;
use std::rc::Rc;

/// Values exposed to the region's template.
///
/// The current until-condition is kept under two aliases so a template can
/// read it either as the implicit value or by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadingContext {
    pub implicit: Option<Value>,
    pub loading: Option<Value>,
}

impl LoadingContext {
    pub fn set_until(&mut self, until: Value) {
        self.implicit = Some(until.clone());
        self.loading = Some(until);
    }

    pub fn until(&self) -> Option<&Value> {
        self.implicit.as_ref()
    }
}

/// Context shared between a binding and the indicator it created
pub type SharedContext = Rc<RefCell<LoadingContext>>;

/// Truthiness of an until-condition, following the loose rules template
/// authors expect: null, false, zero and empty strings are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_falsy_values() {
        for value in [json!(null), json!(false), json!(0), json!(0.0), json!("")] {
            assert!(!is_truthy(&value), "{value} should be falsy");
        }
    }

    #[test]
    fn test_truthy_values() {
        for value in [json!(true), json!(1), json!(-2.5), json!("0"), json!([]), json!({})] {
            assert!(is_truthy(&value), "{value} should be truthy");
        }
    }

    #[test]
    fn test_set_until_updates_both_aliases() {
        let mut context = LoadingContext::default();
        context.set_until(json!({"rows": 3}));

        assert_eq!(context.implicit, context.loading);
        assert_eq!(context.until(), Some(&json!({"rows": 3})));
    }
}
