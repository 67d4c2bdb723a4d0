//! Successful parses of realistic filter expressions.

#[cfg(test)]
mod tests {
    use filterexpr::{Argument, CallExpression, ParserConfig, StringLiteral, parse_with_config};

    use crate::parse_ok;

    fn call(name: &str, args: Vec<Argument>) -> Argument {
        Argument::Call(CallExpression::new(name, args))
    }

    fn lit(value: &str) -> Argument {
        Argument::StringLiteral(StringLiteral::new(value))
    }

    #[test]
    fn test_should_build_expected_tree() {
        let program = parse_ok(r#"and(or(eq("a","b"), like("c","d")), gt("e","f"))"#).unwrap();
        let expected = CallExpression::new(
            "and",
            vec![
                call(
                    "or",
                    vec![
                        call("eq", vec![lit("a"), lit("b")]),
                        call("like", vec![lit("c"), lit("d")]),
                    ],
                ),
                call("gt", vec![lit("e"), lit("f")]),
            ],
        );
        assert_eq!(program.expression, expected);
        assert_eq!(program.expression.depth(), 3);
    }

    #[test]
    fn test_should_parse_multiline_expression() {
        let program = parse_ok(
            r#"
            and(
                eq("status", "open"),
                not(isNull("assignee")),
                like("title", "%crash%")
            )
            "#,
        )
        .unwrap();
        assert_eq!(program.expression.args.len(), 3);
        assert_eq!(
            program.to_string(),
            r#"and(eq("status", "open"), not(isNull("assignee")), like("title", "%crash%"))"#
        );
    }

    #[test]
    fn test_should_treat_numbers_as_quoted_strings() {
        let program = parse_ok(r#"gt("age", "42")"#).unwrap();
        assert_eq!(program.expression.args[1], lit("42"));
    }

    #[test]
    fn test_should_parse_identically_across_threads() {
        let inputs = [
            r#"eq("a","b")"#,
            r#"and(eq("a","b"), isNull("c"))"#,
            r#"((or(lt("x","1"), gt("x","9"))))"#,
        ];
        let handles: Vec<_> = inputs
            .iter()
            .map(|input| {
                let input = (*input).to_owned();
                std::thread::spawn(move || parse_ok(&input).unwrap())
            })
            .collect();
        for (handle, input) in handles.into_iter().zip(inputs) {
            assert_eq!(handle.join().unwrap(), parse_ok(input).unwrap());
        }
    }

    #[test]
    fn test_should_accept_deep_nesting_within_limit() {
        let depth = 50;
        let input = format!("{}{}", "not(".repeat(depth), ")".repeat(depth));
        let program = parse_with_config(&input, ParserConfig::default()).unwrap();
        assert_eq!(program.expression.depth(), depth);
    }

    #[test]
    fn test_should_emit_tagged_json() {
        let program = parse_ok(r#"isNull("column")"#).unwrap();
        let json = serde_json::to_string(&program).unwrap();
        assert_eq!(
            json,
            r#"{"expression":{"functionName":"isNull","args":[{"type":"StringLiteral","value":"column"}]}}"#
        );
    }
}
