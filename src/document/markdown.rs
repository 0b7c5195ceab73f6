use comrak::Options;

/// Create ComrakOptions with GitHub Flavored Markdown settings
pub fn create_comrak_options<'a>() -> Options<'a> {
    let mut options = Options::default();

    options.extension.strikethrough = true;
    options.extension.tagfilter = false;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.extension.footnotes = true;
    // Heading ids are assigned by the heading parser so the TOC links and the ids agree.
    options.extension.header_ids = None;

    // Raw HTML must survive so documents can carry their own TOC container.
    options.render.unsafe_ = true;
    options.render.github_pre_lang = true;

    options.parse.smart = true;

    options
}

/// Render markdown to HTML using Comrak
pub fn render_markdown(content: &str) -> String {
    let options = create_comrak_options();
    comrak::markdown_to_html(content, &options)
}
