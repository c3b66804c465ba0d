//! Footnote definitions, references and the registry

use orgtext::org::ast::EmphKind;
use orgtext::org::parsing::parse_document;
use orgtext::org::testing::{assert_ast, Fixture};

#[test]
fn test_footnotes_fixture() {
    let doc = Fixture::named("footnotes").parse();

    assert_ast(&doc)
        .item_count(4)
        .item(0, |item| {
            item.assert_paragraph().inlines(|inlines| {
                inlines
                    .node(1, |n| n.footnote_ref("alpha"))
                    .node(3, |n| n.footnote_ref("beta"));
            });
        })
        .item(1, |item| {
            item.assert_unordered_list();
        })
        .item(2, |item| {
            item.assert_footnote_definition().name("beta").line_count(2);
        })
        .item(3, |item| {
            item.assert_footnote_definition().name("alpha").line_count(1);
        })
        .footnote_count(3)
        .footnote_order(&["alpha", "beta", "gamma"])
        .footnote("alpha", |f| {
            f.ordinal(1).body_text("Alpha body.");
        })
        .footnote("beta", |f| {
            f.ordinal(2)
                .body_text("Beta body with bold\ncontinues here.");
        })
        .footnote("gamma", |f| {
            f.ordinal(3).undefined();
        });
}

#[test]
fn test_definition_before_reference_takes_first_ordinal() {
    let doc = parse_document("[fn:late] Defined first.\n\nUses [fn:early] then [fn:late].\n");
    assert_ast(&doc)
        .footnote_order(&["late", "early"])
        .footnote("late", |f| {
            f.ordinal(1).body_text("Defined first.");
        })
        .footnote("early", |f| {
            f.ordinal(2).undefined();
        });
}

#[test]
fn test_redefinition_keeps_ordinal_and_last_body() {
    let doc = parse_document("[fn:x] first\n\n[fn:y] other\n\n[fn:x] second\n");
    assert_ast(&doc)
        .item_count(3)
        .footnote_count(2)
        .footnote("x", |f| {
            f.ordinal(1).body_text("second");
        });
}

#[test]
fn test_each_definition_keeps_its_own_body() {
    let doc = parse_document("[fn:x] body\n\n\n[fn:x] again\nref[fn:x]\n");
    assert_ast(&doc)
        .item_count(2)
        .item(0, |item| {
            item.assert_footnote_definition().name("x").text("body");
        })
        .item(1, |item| {
            item.assert_footnote_definition()
                .name("x")
                .text("again\nref[x]")
                .inlines(|inlines| {
                    inlines.count(2).node(1, |n| n.footnote_ref("x"));
                });
        })
        .footnote_count(1)
        .footnote("x", |f| {
            f.ordinal(1).body_text("again\nref[x]");
        });
}

#[test]
fn test_bare_bracket_name_defines_footnote() {
    let doc = parse_document("Text[fn:1].\n\n[1] Numbered note.\n");
    assert_ast(&doc)
        .item(1, |item| {
            item.assert_footnote_definition().name("1");
        })
        .footnote("1", |f| {
            f.ordinal(1).body_text("Numbered note.");
        });
}

#[test]
fn test_adjacent_definition_lines_merge() {
    let doc = parse_document("[fn:a] one\n[fn:b] two\n");
    assert_ast(&doc)
        .item_count(1)
        .item(0, |item| {
            item.assert_footnote_definition().name("a").line_count(2);
        })
        .footnote("a", |f| {
            f.ordinal(1).body_text("one\n[b] two");
        })
        .footnote("b", |f| {
            f.ordinal(2).undefined();
        });
}

#[test]
fn test_reference_inside_emphasis_is_registered() {
    let doc = parse_document("*bold[fn:deep]* text\n");
    assert_ast(&doc)
        .item(0, |item| {
            item.assert_paragraph().inlines(|inlines| {
                inlines.node(0, |n| {
                    n.emph(EmphKind::Bold, |body| {
                        body.count(2).node(1, |r| r.footnote_ref("deep"));
                    })
                });
            });
        })
        .footnote("deep", |f| {
            f.ordinal(1);
        });
}

#[test]
fn test_reference_in_footnote_body_is_registered() {
    let doc = parse_document("[fn:a] see [fn:b]\n\n[fn:b] the other\n");
    assert_ast(&doc)
        .footnote_order(&["a", "b"])
        .footnote("b", |f| {
            f.ordinal(2).body_text("the other");
        });
}

#[test]
fn test_comment_lines_are_dropped_from_footnote_body() {
    let doc = parse_document("[fn:c] body\n# hidden\nmore\n");
    assert_ast(&doc).footnote("c", |f| {
        f.body_text("body\nmore");
    });
}
