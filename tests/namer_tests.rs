// tests/namer_tests.rs
//
// End-to-end naming: source text in, ranked names out.

mod common;

use common::{names, names_with};
use nomen::format::is_valid_identifier;
use nomen::Profile;

// ---
// Identifiers and member access
// ---

#[test]
fn test_identifier_names_itself() {
    assert_eq!(names("name"), ["name"]);
}

#[test]
fn test_member_uses_object_and_property() {
    assert_eq!(names("Ember.get"), ["get", "EmberGet"]);
}

#[test]
fn test_nested_member_access() {
    assert_eq!(names("foo.bar.baz"), ["baz", "barBaz", "fooBarBaz"]);
}

#[test]
fn test_computed_member_access() {
    assert_eq!(names("foo[bar.baz]"), ["baz", "barBaz", "fooBaz", "fooBarBaz"]);
}

// ---
// Literals
// ---

#[test]
fn test_literals_without_parent() {
    assert_eq!(names("1"), ["number"]);
    assert_eq!(names("\"hey there!\""), ["heyThere", "string"]);
    assert_eq!(names("/a/"), ["regex", "pattern"]);
}

#[test]
fn test_literals_with_parent() {
    assert_eq!(names("list[0]"), ["list0"]);
    assert_eq!(
        names("dict[\"hey there!\"]"),
        ["heyThere", "string", "dictHeyThere", "dictString"]
    );
    assert_eq!(names("s[/a/]"), ["regex", "pattern", "sRegex", "sPattern"]);
    assert!(names("list[1e21]").is_empty());
}

#[test]
fn test_null_literal() {
    assert_eq!(names("null"), ["null", "none", "nil"]);
    assert_eq!(names("cache[null]"), ["null", "none", "nil", "cacheNull", "cacheNone", "cacheNil"]);
}

#[test]
fn test_literals_without_names() {
    assert!(names("true").is_empty());
    assert!(names("flag && false").is_empty());
    assert_eq!(names("\"!!\""), ["string"]);
}

// ---
// Functions, calls, and constructors
// ---

#[test]
fn test_function_names() {
    assert_eq!(names("(function doFoo() {})"), ["doFoo", "fn", "func"]);
    assert_eq!(names("(function () {})"), ["fn", "func"]);
    assert_eq!(names("function doFoo() {}"), ["doFoo", "fn", "func"]);
}

#[test]
fn test_call_without_subject() {
    assert_eq!(names("foo()"), ["result", "fooResult"]);
}

#[test]
fn test_call_subject_after_verb() {
    assert_eq!(names("getFirstPerson()"), ["firstPerson", "result", "getFirstPersonResult"]);
    assert_eq!(names("fetchRecords()"), ["records", "result", "fetchRecordsResult"]);
}

#[test]
fn test_call_subject_before_preposition() {
    assert_eq!(
        names("listenerWithName(\"onclick\")"),
        ["listener", "result", "listenerWithNameResult"]
    );
    assert_eq!(names("indexOf(\"-\")"), ["index", "result", "indexOfResult"]);
    assert_eq!(names("objectAtIndex(2)"), ["object", "result", "objectAtIndexResult"]);
    assert_eq!(names("valueForKey(\"name\")"), ["value", "result", "valueForKeyResult"]);
}

#[test]
fn test_call_subject_with_verb_and_preposition() {
    assert_eq!(
        names("getValueForKey(\"name\")"),
        ["value", "result", "getValueForKeyResult"]
    );
}

#[test]
fn test_call_on_member() {
    assert_eq!(
        names("string.indexOf(prefix)"),
        ["index", "stringIndex", "result", "indexOfResult", "stringIndexOfResult"]
    );
}

#[test]
fn test_new_expression() {
    assert_eq!(
        names("new FieldKit.NumberFormatter()"),
        [
            "numberFormatter",
            "fieldKitNumberFormatter",
            "newNumberFormatter",
            "newFieldKitNumberFormatter"
        ]
    );
}

// ---
// Fixed-word kinds
// ---

#[test]
fn test_this_object_array() {
    assert_eq!(names("this"), ["this", "self", "that", "me"]);
    assert_eq!(names("({})"), ["object", "obj"]);
    assert_eq!(names("[]"), ["list", "array", "arr"]);
}

// ---
// Operators
// ---

#[test]
fn test_unary_not() {
    assert_eq!(names("!equal"), ["notEqual"]);
    assert_eq!(names("!notEqual"), ["equal"]);
}

#[test]
fn test_unary_negative() {
    assert_eq!(names("-offset"), ["negativeOffset"]);
    assert_eq!(names("-negativeOffset"), ["offset"]);
}

#[test]
fn test_unary_operand_sees_operator_as_parent() {
    assert_eq!(names("-1"), ["negative1"]);
    assert_eq!(names("items[-1]"), ["negative1", "itemsNegative1"]);
    assert_eq!(names_with(Profile::ContextInsensitive, "-1"), ["negativeNumber"]);
}

#[test]
fn test_unary_positive_and_void() {
    assert_eq!(names("+offset"), ["positiveOffset"]);
    assert_eq!(names("+positiveOffset"), ["positiveOffset"]);
    assert_eq!(names("void name"), ["voidName"]);
    assert_eq!(names("void voidName"), ["voidName"]);
}

#[test]
fn test_binary_connectives() {
    assert_eq!(names("x + view.width"), ["xPlusWidth", "xPlusViewWidth"]);
    assert_eq!(names("x - view.width"), ["xMinusWidth", "xMinusViewWidth"]);
    assert_eq!(names("x * view.width"), ["xTimesWidth", "xTimesViewWidth"]);
    assert_eq!(names("x / view.width"), ["xOverWidth", "xOverViewWidth"]);
}

#[test]
fn test_assignment_prefers_value() {
    assert_eq!(names("x = view.offset"), ["offset", "viewOffset", "x"]);
    assert_eq!(names("x = 5"), ["x"]);
}

#[test]
fn test_update_expressions() {
    assert_eq!(names("x++"), ["x", "oldX", "originalX"]);
    assert_eq!(names("++x"), ["nextX", "newX", "xIncr"]);
}

#[test]
fn test_logical_connectives() {
    assert_eq!(names("a && b"), ["aAndB"]);
    assert_eq!(names("a || b"), ["aOrB"]);
}

#[test]
fn test_conditional() {
    assert_eq!(names("a ? b : c"), ["bOrC", "result"]);
}

// ---
// Profiles and global properties
// ---

#[test]
fn test_profiles_differ_only_on_numbers_and_this() {
    assert_eq!(names_with(Profile::ContextInsensitive, "list[0]"), ["number", "listNumber"]);
    assert_eq!(names_with(Profile::ContextSensitive, "list[0]"), ["list0"]);
    assert_eq!(
        names_with(Profile::ContextSensitive, "this.count"),
        ["count", "myCount", "thisCount", "selfCount", "thatCount", "meCount"]
    );
    assert_eq!(
        names_with(Profile::ContextInsensitive, "this.count"),
        ["count", "thisCount", "selfCount", "thatCount", "meCount"]
    );
    for source in ["foo.bar.baz", "getValueForKey(\"name\")", "x++", "a ? b : c"] {
        assert_eq!(
            names_with(Profile::ContextInsensitive, source),
            names_with(Profile::ContextSensitive, source),
            "{source}"
        );
    }
}

#[test]
fn test_every_name_is_an_identifier() {
    let sources = [
        "a.b[1.5]",
        "items[-1]",
        "x % \"100%\"",
        "typeof value === 'string'",
        "cond ? [] : {}",
        "new (getFactory())()",
        "delete cache[key]",
        "a ?? b",
        "~mask",
        "--this.count",
        "x = y = 0",
    ];
    for source in sources {
        for name in names(source) {
            assert!(is_valid_identifier(&name), "{name:?} from {source}");
        }
    }
}

#[test]
fn test_naming_is_deterministic() {
    let source = "getValueForKey(dict[\"hey there!\"]) || new FieldKit.NumberFormatter()";
    assert_eq!(names(source), names(source));
}

#[test]
fn test_lazy_prefix_matches_full_run() {
    let expr = nomen::syntax::parse("a.b.c + d.e.f * g.h").unwrap();
    let all = nomen::all_names_for_expression(&expr);
    let first: Vec<String> = nomen::names_for_expression(&expr).take(3).collect();
    assert_eq!(first, all[..3]);
}
