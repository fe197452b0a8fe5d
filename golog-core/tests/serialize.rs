#[cfg(test)]
mod tests {
    use golog_core::{
        atom, cmp, error::*, literals::new_int, term, terms::*, value, Bindings,
    };

    #[test]
    fn serialize_test() {
        assert_eq!(
            serde_json::to_string(&atom!("foo")).unwrap(),
            r#"{"value":{"Atom":"foo"}}"#
        );
        assert_eq!(
            serde_json::to_string(&term!(1.5)).unwrap(),
            r#"{"value":{"Number":{"Float":1.5}}}"#
        );
        assert_eq!(
            serde_json::to_string(&cmp!("f", [atom!("a")])).unwrap(),
            r#"{"value":{"Compound":{"functor":"f","args":[{"value":{"Atom":"a"}}]}}}"#
        );
        assert_eq!(
            serde_json::to_string(&value!("bar")).unwrap(),
            r#"{"Atom":"bar"}"#
        );

        let x = Variable::new("X");
        assert_eq!(
            serde_json::to_string(&Term::from(x.clone())).unwrap(),
            format!(r#"{{"value":{{"Variable":{{"name":"X","id":{}}}}}}}"#, x.id)
        );

        let e = GologError::from(ParseError::InvalidInteger {
            token: "12a".to_owned(),
        });
        assert_eq!(
            serde_json::to_string(&e).unwrap(),
            r#"{"kind":{"Parse":{"InvalidInteger":{"token":"12a"}}}}"#
        );
        let e = GologError::from(RuntimeError::Exception {
            msg: "boom".to_owned(),
        });
        assert_eq!(
            serde_json::to_string(&e).unwrap(),
            r#"{"kind":{"Runtime":{"Exception":{"msg":"boom"}}}}"#
        );
    }

    #[test]
    fn deserialize_test() {
        let big = Term::from(new_int("-98765432109876543210").unwrap());
        let r = Term::from(new_int("0'a").unwrap());
        let t = Term::list(vec![big, r, cmp!("g", [term!(0.5)])]);
        let json = serde_json::to_string(&t).unwrap();
        let back: Term = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
        assert_eq!(back.to_string(), "[-98765432109876543210,97,g(0.5)]");

        let x = Variable::new("X");
        let env = Bindings::new()
            .bind(&x, atom!("a"))
            .unwrap()
            .with_names(vec![x.clone()]);
        let json = serde_json::to_string(&env).unwrap();
        let back: Bindings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.resolve(&x), Some(atom!("a")));
        assert_eq!(back.to_string(), "{X = a}");
    }
}
