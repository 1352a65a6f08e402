//! Self-contained HTML tree viewer

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use super::json::NodeView;
use crate::{Error, Result, tree::GameTree};

const HEADER: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>Tic-Tac-Toe Game Tree</title>
    <style>
        ul { list-style-type: none; padding-left: 20px; }
        span.node { cursor: pointer; }
    </style>
</head>
<body>
    <h1>Tic-Tac-Toe Game Tree</h1>
    <div id="tree-container"></div>
    <script>
        const treeData = "#;

const FOOTER: &str = r#";

        function createTreeNode(node) {
            const li = document.createElement("li");
            const row = document.createElement("div");
            row.style.display = "flex";
            row.style.alignItems = "center";

            const toggle = document.createElement("span");
            toggle.textContent = "▶";
            toggle.style.cursor = "pointer";
            toggle.style.width = "1em";
            toggle.style.display = node.children.length ? "inline-block" : "none";

            const label = document.createElement("span");
            label.className = "node";
            label.textContent = node.move + " (Outcome: " + node.outcome + ")"
                + (node.truncated ? " …" : "");
            label.style.marginLeft = "0.5em";

            row.appendChild(toggle);
            row.appendChild(label);
            li.appendChild(row);

            const ul = document.createElement("ul");
            ul.style.display = "none";
            for (const child of node.children) {
                ul.appendChild(createTreeNode(child));
            }
            li.appendChild(ul);

            toggle.onclick = () => {
                const expanded = ul.style.display === "block";
                ul.style.display = expanded ? "none" : "block";
                toggle.textContent = expanded ? "▶" : "▼";
            };
            label.onclick = toggle.onclick;

            return li;
        }

        const container = document.getElementById("tree-container");
        const top = document.createElement("ul");
        top.appendChild(createTreeNode(treeData));
        container.appendChild(top);
    </script>
</body>
</html>
"#;

/// Render the viewer page for the whole tree into `out`
pub fn render_html<W: Write>(tree: &GameTree, max_depth: Option<usize>, mut out: W) -> Result<()> {
    out.write_all(HEADER.as_bytes())?;
    serde_json::to_writer(&mut out, &NodeView::new(tree, tree.root(), max_depth))?;
    out.write_all(FOOTER.as_bytes())?;
    Ok(())
}

/// Write the viewer page to `path`
pub fn write_html(tree: &GameTree, path: &Path, max_depth: Option<usize>) -> Result<()> {
    let file = File::create(path).map_err(|source| Error::Io {
        operation: format!("create {}", path.display()),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    render_html(tree, max_depth, &mut writer)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_embeds_tree_json() {
        let tree = GameTree::from_opening(&[0, 3, 1, 4, 2]).unwrap();
        let mut page = Vec::new();
        render_html(&tree, None, &mut page).unwrap();
        let page = String::from_utf8(page).unwrap();

        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains(r#"const treeData = {"move":"Start""#));
        assert!(page.contains("Player X to (0, 2)"));
        assert!(page.trim_end().ends_with("</html>"));
    }
}
