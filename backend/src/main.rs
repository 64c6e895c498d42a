use moon::*;

const TITLE: &str = "Grok List";

/// Extra `<head>` content for the document hosting the `app` mount point.
fn head_html() -> String {
    [
        r#"<meta name="description" content="Grok List grocery planner">"#,
        r#"<meta name="color-scheme" content="light dark">"#,
    ]
    .concat()
}

async fn frontend() -> Frontend {
    Frontend::new()
        .title(TITLE)
        .append_to_head(&head_html())
        .index_by_robots(false)
}

// Nothing is sent up from the app; requests are dropped.
async fn up_msg_handler(_: UpMsgRequest<()>) {}

#[moon::main]
async fn main() -> std::io::Result<()> {
    start(frontend, up_msg_handler, |_| {}).await
}
