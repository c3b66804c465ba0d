//! Paragraph and ignored-line parsing

use orgtext::org::ast::EmphKind;
use orgtext::org::parsing::parse_document;
use orgtext::org::testing::{assert_ast, Fixture};

#[test]
fn test_paragraphs_fixture() {
    let doc = Fixture::named("paragraphs").parse();

    assert_ast(&doc)
        .item_count(5)
        .item(0, |item| {
            item.assert_ignored_line()
                .content("#+TITLE: Paragraph samples");
        })
        .item(1, |item| {
            item.assert_paragraph()
                .line_count(2)
                .text("First paragraph runs\nover two lines.");
        })
        .item(2, |item| {
            item.assert_paragraph().line_count(2).inlines(|inlines| {
                inlines
                    .count(13)
                    .node(0, |n| n.raw("Second paragraph with "))
                    .node(1, |n| n.emph(EmphKind::Bold, |b| {
                        b.plain_text("bold");
                    }))
                    .node(3, |n| n.emph(EmphKind::Italic, |b| {
                        b.plain_text("italic");
                    }))
                    .node(5, |n| n.emph(EmphKind::Underline, |b| {
                        b.plain_text("underline");
                    }))
                    .node(7, |n| n.emph(EmphKind::Strike, |b| {
                        b.plain_text("strike");
                    }))
                    .node(8, |n| n.raw(",\n"))
                    .node(9, |n| n.code("code"))
                    .node(11, |n| n.verbatim("verbatim"))
                    .node(12, |n| n.raw(" spans."));
            });
        })
        .item(3, |item| {
            item.assert_ignored_line()
                .content("a comment between paragraphs");
        })
        .item(4, |item| {
            item.assert_paragraph().text("Third paragraph.");
        });
}

#[test]
fn test_blank_line_ends_paragraph() {
    let doc = parse_document("one\ntwo\n\nthree\n");
    assert_ast(&doc)
        .item_count(2)
        .item(0, |item| {
            item.assert_paragraph().line_count(2);
        })
        .item(1, |item| {
            item.assert_paragraph().text("three");
        });
}

#[test]
fn test_leading_whitespace_is_not_part_of_the_text() {
    let doc = parse_document("   indented start\n      and deeper\n");
    assert_ast(&doc).item_count(1).item(0, |item| {
        item.assert_paragraph()
            .indent(0)
            .text("indented start\nand deeper");
    });
}

#[test]
fn test_paragraph_stops_at_other_block_kinds() {
    let doc = parse_document("text\n- item\n");
    assert_ast(&doc)
        .item_count(2)
        .item(0, |item| {
            item.assert_paragraph().text("text");
        })
        .item(1, |item| {
            item.assert_unordered_list();
        });
}

#[test]
fn test_bare_hash_is_an_empty_comment() {
    let doc = parse_document("#\n#not a comment\n");
    assert_ast(&doc)
        .item_count(2)
        .item(0, |item| {
            item.assert_ignored_line().content("");
        })
        .item(1, |item| {
            item.assert_paragraph().text("#not a comment");
        });
}

#[test]
fn test_crlf_line_endings() {
    let doc = parse_document("one\r\ntwo\r\n\r\nthree\r\n");
    assert_ast(&doc)
        .item_count(2)
        .item(0, |item| {
            item.assert_paragraph().text("one\ntwo");
        });
}
