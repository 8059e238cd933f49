use casekit::*;
use std::fmt;

#[test]
fn converts_to_camel() {
    assert_eq!(to_camel("hello-world", None), "helloWorld");
    assert_eq!(to_camel("HELLO_WORLD", None), "helloWorld");
    assert_eq!(to_camel("Hello World", Some(Case::Title)), "helloWorld");
}

#[test]
fn converts_to_pascal() {
    assert_eq!(to_pascal("hello-world", None), "HelloWorld");
    assert_eq!(to_pascal("hello_world", None), "HelloWorld");
    assert_eq!(to_pascal("helloWorld", Some(Case::Camel)), "HelloWorld");
}

#[test]
fn converts_to_snake() {
    assert_eq!(to_snake("helloWorld", None), "hello_world");
    assert_eq!(to_snake("Hello World", None), "hello_world");
    assert_eq!(to_snake("hello-world", Some(Case::Kebab)), "hello_world");
}

#[test]
fn converts_to_kebab() {
    assert_eq!(to_kebab("helloWorld", None), "hello-world");
    assert_eq!(to_kebab("Hello World", None), "hello-world");
    assert_eq!(to_kebab("hello_world", Some(Case::Snake)), "hello-world");
}

#[test]
fn converts_to_constant() {
    assert_eq!(to_constant("helloWorld", None), "HELLO_WORLD");
    assert_eq!(to_constant("hello-world", None), "HELLO_WORLD");
    assert_eq!(to_constant("hello.world", Some(Case::Dot)), "HELLO_WORLD");
}

#[test]
fn converts_to_title() {
    assert_eq!(to_title("helloWorld", None), "Hello World");
    assert_eq!(to_title("hello-world", None), "Hello World");
    assert_eq!(to_title("HELLO_WORLD", Some(Case::Constant)), "Hello World");
}

#[test]
fn converts_to_dot() {
    assert_eq!(to_dot("hello_world", None), "hello.world");
    assert_eq!(to_dot("Hello World", None), "hello.world");
    assert_eq!(to_dot("HelloWorld", Some(Case::Pascal)), "hello.world");
}

#[test]
fn converts_to_no() {
    assert_eq!(to_no("hello-world", None), "hello world");
    assert_eq!(to_no("hello/world", None), "hello world");
    assert_eq!(to_no("Hello world", Some(Case::Sentence)), "hello world");
}

#[test]
fn converts_to_sentence() {
    assert_eq!(to_sentence("HELLO_WORLD", None), "Hello world");
    assert_eq!(to_sentence("hello.world", None), "Hello world");
    assert_eq!(to_sentence("hello world", Some(Case::No)), "Hello world");
}

#[test]
fn converts_to_path() {
    assert_eq!(to_path("helloWorld", None), "hello/world");
    assert_eq!(to_path("hello world", None), "hello/world");
    assert_eq!(to_path("Hello World", Some(Case::Title)), "hello/world");
}

#[test]
fn empty_input() {
    assert_eq!(to_camel("", None), "");
    assert_eq!(to_snake("", None), "");
    assert_eq!(to_no("", Case::from_hint("")), "");
    for case in Case::ALL {
        assert!(to_array("", Some(case)).is_empty());
    }
}

struct Ident<'a>(&'a str, u32);

impl fmt::Display for Ident<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0, self.1)
    }
}

#[test]
fn stringifies_non_string_input() {
    assert_eq!(to_kebab(123, None), "123");
    assert_eq!(to_title(true, None), "True");
    assert_eq!(to_pascal('x', None), "X");
    assert_eq!(to_constant(Ident("retryCount", 3), None), "RETRY_COUNT_3");
    assert_eq!(to_snake(to_camel("hello world", None), None), "hello_world");
}

#[test]
fn mixed_formats() {
    assert_eq!(
        to_array("hello.WORLD_foo-bar", None),
        vec!["hello", "world", "foo", "bar"]
    );
    assert_eq!(to_array("openAI_WHO", None), vec!["open", "ai", "who"]);
    assert_eq!(
        to_snake(
            "If I useTitle-case as an argument, it will only remove spaces/uppercases",
            Some(Case::Title)
        ),
        "if_i_usetitle-case_as_an_argument,_it_will_only_remove_spaces/uppercases"
    );
}

#[test]
fn unknown_source_hints_fall_back_to_detection() {
    assert_eq!(to_title("hello_world", Case::from_hint("yolo")), "Hello World");
    assert_eq!(to_title("hello_world", Case::from_hint("bogus")), "Hello World");
    assert_eq!(detect("HELLO_WORLD"), Some(Case::Constant));
    assert_eq!(to_camel("AR3_y0u-GONNA break Yet?", None), "ar3Y0uGonnaBreakYet?");
    assert_eq!(to_constant("", Case::from_hint("{}")), "");
}

#[test]
fn explicit_source_round_trips() {
    let sequences: [&[&str]; 3] = [&["hello"], &["hello", "world"], &["version", "2", "final"]];

    for words in sequences {
        for case in Case::ALL {
            let assembled = case.assemble(words);
            assert_eq!(to_array(&assembled, Some(case)), words, "{} -> {:?}", case, assembled);
        }
    }
}

#[test]
fn assembled_strings_detect_as_their_case() {
    let words = ["hello", "world"];
    for case in Case::ALL {
        assert_eq!(detect(case.assemble(&words)), Some(case), "{}", case);
    }
}

#[test]
fn convert_agrees_with_named_functions() {
    let input = "someMixed_input-string";
    assert_eq!(convert(input, Case::Camel, None), to_camel(input, None));
    assert_eq!(convert(input, Case::Path, None), to_path(input, None));
    assert_eq!(convert(input, Case::Sentence, None), to_sentence(input, None));
}
