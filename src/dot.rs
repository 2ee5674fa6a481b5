use std::fmt::{Display, Write};

use crate::node::Node;

/// Render the subtree rooted at `n` as a Graphviz digraph, one record per
/// node showing the value, cached height and balance factor.
///
/// Handy for eyeballing the shape of a tree when a test fails.
#[allow(unused)]
pub(crate) fn print_dot<T>(n: &Node<T>) -> String
where
    T: Display,
{
    let mut buf = String::new();

    writeln!(buf, "digraph {{").unwrap();
    writeln!(buf, r#"node [shape = record;];"#).unwrap();
    recurse(n, &mut buf);
    writeln!(buf, "}}").unwrap();

    buf
}

fn recurse<T, W>(n: &Node<T>, buf: &mut W)
where
    W: std::fmt::Write,
    T: Display,
{
    writeln!(
        buf,
        r#""{}" [label="{} | {{ h={} | bf={} }}"];"#,
        n.value(),
        n.value(),
        n.height(),
        n.balance_factor(),
    )
    .unwrap();

    for v in [n.left(), n.right()] {
        match v {
            Some(v) => {
                writeln!(buf, "\"{}\" -> \"{}\";", n.value(), v.value()).unwrap();
                recurse(v, buf);
            }
            None => {
                writeln!(buf, "\"null_{}\" [shape=point,style=invis];", n.value()).unwrap();
                writeln!(
                    buf,
                    "\"{}\" -> \"null_{}\" [style=invis];",
                    n.value(),
                    n.value()
                )
                .unwrap();
            }
        };
    }
}
