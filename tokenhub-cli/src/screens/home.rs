use std::fmt::Write;
use tokenhub_shared::models::tokens::Operation;
use crate::router::{tool_views, View};

pub fn render() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "TokenHub");
    let _ = writeln!(out, "Check balances, deploy, mint and burn ERC20, ERC721 and ERC1155 tokens.");

    for operation in Operation::ALL {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", operation.title());
        for view in tool_views() {
            if let View::Tool { operation: op, .. } = view {
                if op == operation {
                    let _ = writeln!(out, "  {:<16} {}", view.path(), view.title());
                }
            }
        }
    }
    out
}
