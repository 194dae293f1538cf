//! Console renderings of the frequency table, code table and tree.
//!
//! All functions only read their input and return the rendered text.

use std::fmt::Write;

use crate::codes::CodeTable;
use crate::frequency::FrequencyTable;
use crate::tree::{HuffmanTree, Node, NodeId};

const RULE: &str = "---------------------------";

/// Printable form of a character: a space becomes `' '`, control characters are escaped.
pub fn char_label(ch: char) -> String {
    if ch == ' ' {
        "' '".to_string()
    } else {
        ch.escape_debug().to_string()
    }
}

/// Rows sorted by count, most frequent first; equal counts by character.
pub fn frequency_table(frequencies: &FrequencyTable) -> String {
    let mut rows: Vec<(char, u64)> = frequencies.iter().collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    let mut out = String::new();
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "{:<9} | Count", "Char");
    let _ = writeln!(out, "{RULE}");
    for (ch, count) in rows {
        let _ = writeln!(out, "{:<9} | {}", char_label(ch), count);
    }
    let _ = writeln!(out, "{RULE}");
    out
}

/// Rows sorted by character.
pub fn code_table(codes: &CodeTable) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "{:<9} | Code", "Char");
    let _ = writeln!(out, "{RULE}");
    for (ch, code) in codes.iter() {
        let _ = writeln!(out, "{:<9} | {}", char_label(ch), code);
    }
    let _ = writeln!(out, "{RULE}");
    out
}

/// One node per line, right subtree listed above the left one.
pub fn tree_diagram(tree: &HuffmanTree) -> String {
    let mut out = String::new();
    draw(tree, tree.root(), "", true, &mut out);
    out
}

fn draw(tree: &HuffmanTree, id: NodeId, prefix: &str, last: bool, out: &mut String) {
    let (branch, indent) = if last { ("└── ", "    ") } else { ("├── ", "|   ") };
    match *tree.node(id) {
        Node::Leaf { ch, weight } => {
            let _ = writeln!(out, "{prefix}{branch}'{}' ({weight})", ch.escape_debug());
        }
        Node::Internal { weight, left, right } => {
            let _ = writeln!(out, "{prefix}{branch}[I] ({weight})");
            let child_prefix = format!("{prefix}{indent}");
            draw(tree, right, &child_prefix, false, out);
            draw(tree, left, &child_prefix, true, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        assert_eq!(char_label(' '), "' '");
        assert_eq!(char_label('\n'), "\\n");
        assert_eq!(char_label('é'), "é");
    }

    #[test]
    fn frequency_rows_most_frequent_first() {
        let rendered = frequency_table(&FrequencyTable::from_text("banana bandada"));
        let rows: Vec<&str> = rendered.lines().skip(3).take(5).collect();
        assert_eq!(
            rows,
            vec!["a         | 6", "n         | 3", "b         | 2", "d         | 2", "' '       | 1"]
        );
    }

    #[test]
    fn code_rows_by_character() {
        let tree = HuffmanTree::build(&FrequencyTable::from_text("aab")).unwrap();
        let rendered = code_table(&CodeTable::generate(Some(&tree)));
        let rows: Vec<&str> = rendered.lines().skip(3).take(2).collect();
        assert_eq!(rows, vec!["a         | 1", "b         | 0"]);
    }

    #[test]
    fn diagram_lists_right_before_left() {
        let tree = HuffmanTree::build(&FrequencyTable::from_text("aab")).unwrap();
        assert_eq!(
            tree_diagram(&tree),
            "└── [I] (3)\n    ├── 'a' (2)\n    └── 'b' (1)\n"
        );
    }

    #[test]
    fn nested_diagram_uses_pipe_continuation() {
        let tree = HuffmanTree::build(&FrequencyTable::from_text("banana bandada")).unwrap();
        let expected = "\
└── [I] (14)
    ├── [I] (8)
    |   ├── [I] (5)
    |   |   ├── [I] (3)
    |   |   |   ├── 'b' (2)
    |   |   |   └── ' ' (1)
    |   |   └── 'd' (2)
    |   └── 'n' (3)
    └── 'a' (6)
";
        assert_eq!(tree_diagram(&tree), expected);
    }

    #[test]
    fn single_leaf_diagram() {
        let tree = HuffmanTree::build(&FrequencyTable::from_text("zz")).unwrap();
        assert_eq!(tree_diagram(&tree), "└── 'z' (2)\n");
    }

    #[test]
    fn rendering_leaves_table_untouched() {
        let table = FrequencyTable::from_text("hello");
        let before = table.clone();
        let _ = frequency_table(&table);
        assert_eq!(table, before);
    }
}
