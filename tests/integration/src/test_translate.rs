//! Driving a backend through the `Translator` contract.

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};

    use filterexpr::{Translator, collect_function_names, collect_literal_values, translate};

    use crate::parse_ok;

    /// A tiny in-memory backend that evaluates predicates against one row.
    struct RowFilter<'a> {
        row: &'a HashMap<&'static str, &'static str>,
    }

    #[derive(Debug, Clone, PartialEq)]
    enum Node {
        Value(String),
        Column(Option<String>),
        Bool(bool),
    }

    impl Node {
        fn text(&self) -> Option<&str> {
            match self {
                Self::Value(v) => Some(v.as_str()),
                Self::Column(v) => v.as_deref(),
                Self::Bool(_) => None,
            }
        }
    }

    impl Translator for RowFilter<'_> {
        type Output = Node;
        type Error = String;

        fn call(&mut self, name: &str, args: Vec<Node>) -> Result<Node, String> {
            let result = match (name, args.as_slice()) {
                ("and", _) => args.iter().all(|a| *a == Node::Bool(true)),
                ("or", _) => args.iter().any(|a| *a == Node::Bool(true)),
                ("not", [Node::Bool(b)]) => !b,
                ("eq", [l, r]) => l.text().is_some() && l.text() == r.text(),
                ("isNull", [col]) => col.text().is_none(),
                _ => return Err(format!("unsupported call {name}/{}", args.len())),
            };
            Ok(Node::Bool(result))
        }

        fn literal(&mut self, enclosing: &str, value: &str) -> Result<Node, String> {
            // Literals naming a row key resolve to that column; isNull always takes a column.
            if enclosing == "isNull" || self.row.contains_key(value) {
                Ok(Node::Column(self.row.get(value).map(|v| (*v).to_owned())))
            } else {
                Ok(Node::Value(value.to_owned()))
            }
        }
    }

    fn row() -> HashMap<&'static str, &'static str> {
        HashMap::from([("status", "open"), ("owner", "kim")])
    }

    #[test]
    fn test_should_evaluate_against_row() {
        let row = row();
        let mut filter = RowFilter { row: &row };

        let program =
            parse_ok(r#"and(eq("status", "open"), or(isNull("team"), eq("owner", "lee")))"#)
                .unwrap();
        assert_eq!(translate(&program, &mut filter), Ok(Node::Bool(true)));

        let program = parse_ok(r#"not(eq("owner", "kim"))"#).unwrap();
        assert_eq!(translate(&program, &mut filter), Ok(Node::Bool(false)));
    }

    #[test]
    fn test_should_surface_backend_errors() {
        let row = row();
        let mut filter = RowFilter { row: &row };
        let program = parse_ok(r#"between("status", "a", "z")"#).unwrap();
        assert_eq!(
            translate(&program, &mut filter),
            Err("unsupported call between/3".to_owned())
        );
    }

    #[test]
    fn test_should_find_unknown_columns_before_translating() {
        let row = row();
        let program = parse_ok(r#"and(eq("status", "open"), isNull("team"))"#).unwrap();

        let mut names = HashSet::new();
        collect_function_names(&program, &mut names);
        assert!(names.contains("isNull"));

        let mut values = HashSet::new();
        collect_literal_values(&program, &mut values);
        let mut unknown: Vec<_> = values
            .iter()
            .filter(|v| !row.contains_key(v.as_str()) && v.as_str() != "open")
            .cloned()
            .collect();
        unknown.sort();
        assert_eq!(unknown, ["team"]);
    }
}
