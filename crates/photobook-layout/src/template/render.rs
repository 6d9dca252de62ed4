//! Text rendering of the authoring tool's template files
//!
//! The output is the tool's Lua-style table syntax. Nothing here touches the
//! file system, and all identifiers are passed in, so output is deterministic.

use slug::slugify;
use uuid::Uuid;

use crate::constants::CAPTION_SPACING;
use crate::layout::PlacedRectangle;
use crate::types::BookSize;

use super::PageTemplate;

/// One photo placeholder inside a page container
fn render_cell(rect: &PlacedRectangle) -> String {
    let pad = &rect.padding;
    let transform = format!(
        "{{\n\
         \t\t\t\t\t\tangle = 0,\n\
         \t\t\t\t\t\theight = {height},\n\
         \t\t\t\t\t\twidth = {width},\n\
         \t\t\t\t\t\tx = {x},\n\
         \t\t\t\t\t\ty = {y},\n\
         \t\t\t\t\t}}",
        height = rect.height,
        width = rect.width,
        x = rect.x,
        y = rect.y,
    );

    format!(
        "\t\t\t\t{{\n\
         \t\t\t\t\tbottomPad = {bottom},\n\
         \t\t\t\t\tdynamicCellAlignWithPhoto = true,\n\
         \t\t\t\t\tdynamicCellAutoText = \"{{{{custom_token}}}}\",\n\
         \t\t\t\t\tdynamicCellPlacement = \"below\",\n\
         \t\t\t\t\tdynamicCellSpacing = {spacing},\n\
         \t\t\t\t\theight = {spacing},\n\
         \t\t\t\t\thints = {{\n\
         \t\t\t\t\t\tphotoIndex = {index},\n\
         \t\t\t\t\t}},\n\
         \t\t\t\t\tleftPad = {left},\n\
         \t\t\t\t\tplaceholderType = \"photo\",\n\
         \t\t\t\t\trightPad = {right},\n\
         \t\t\t\t\ttopPad = {top},\n\
         \t\t\t\t\ttransform = {transform},\n\
         \t\t\t\t\ttransformFromCustomPage = {transform},\n\
         \t\t\t\t\ttype = \"PDEImage\",\n\
         \t\t\t\t\twidth = {spacing},\n\
         \t\t\t\t}},\n",
        bottom = pad.bottom,
        spacing = CAPTION_SPACING,
        index = rect.index,
        left = pad.left,
        right = pad.right,
        top = pad.top,
        transform = transform,
    )
}

/// One page entry of `templatePages.lua`
pub fn render_page_entry(page: &PageTemplate, paper_id: &str, style_name: &str) -> String {
    let slug = slugify(style_name);
    let page_key = page.page_key(paper_id, &slug);

    let cells: String = page.rectangles.iter().map(render_cell).collect();

    format!(
        "\t\t{{\n\
         \t\t\t{{\n\
         \t\t\t\tbottomPad = 0,\n\
         \t\t\t\tchildren = {{\n\
         {cells}\
         \t\t\t\t}},\n\
         \t\t\t\tleftPad = 0,\n\
         \t\t\t\trightPad = 0,\n\
         \t\t\t\ttopPad = 0,\n\
         \t\t\t\ttype = \"PDEContainer\",\n\
         \t\t\t}},\n\
         \t\t\thints = {{\n\
         \t\t\t\thintType = \"pageOptions\",\n\
         \t\t\t\tpageKey = \"{page_key}\",\n\
         \t\t\t}},\n\
         \t\t\tisSpread = {spread},\n\
         \t\t\tname = \"{style_name}_{id}\",\n\
         \t\t\tpageHeight = {height},\n\
         \t\t\tpageId = \"{page_key}\",\n\
         \t\t\tpageWidth = {width},\n\
         \t\t\tpreviewName = \"{preview}\",\n\
         \t\t\ttitle = \"{style_name}_{id}\",\n\
         \t\t}},\n",
        cells = cells,
        page_key = page_key,
        spread = page.is_spread(),
        style_name = style_name,
        id = page.id,
        height = page.page.height,
        width = page.page.width,
        preview = page.preview_name(),
    )
}

/// The complete `templatePages.lua` for one style
pub fn render_template_pages(
    book: &BookSize,
    style_name: &str,
    pages: &[PageTemplate],
    paper_uuid: Uuid,
) -> String {
    let dims = book.dimensions();
    let paper_id = book.paper_id();
    let entries: String = pages
        .iter()
        .map(|page| render_page_entry(page, paper_id, style_name))
        .collect();

    format!(
        "pages = {{\n\
         \tactualBookHeight = {height},\n\
         \tactualBookWidth = {width},\n\
         \tbackgrounds = {{\n\
         \t}},\n\
         \tbookHeight = {height},\n\
         \tbookWidth = {width},\n\
         \tcovers = {{\n\
         \t\thardcover_imagewrap = {{\n\
         \t\t}},\n\
         \t\thardcover_jacket = {{\n\
         \t\t}},\n\
         \t\tsoftcover = {{\n\
         \t\t}},\n\
         \t}},\n\
         \thints = {{\n\
         \t\tbookTitle = \"{style_name}\",\n\
         \t\thintType = \"bookOptions\",\n\
         \t\tpaperId = \"{paper_id}\",\n\
         \t\tstyleName = \"{slug}\",\n\
         \t}},\n\
         \tpages = {{\n\
         {entries}\
         \t}},\n\
         \tpaperId = \"{paper_uuid}\",\n\
         }}\n",
        height = dims.height,
        width = dims.width,
        style_name = style_name,
        paper_id = paper_id,
        slug = slugify(style_name),
        entries = entries,
        paper_uuid = paper_uuid,
    )
}

/// The `.lrtemplate` descriptor that registers a style with the tool
pub fn render_layout_style(
    book: &BookSize,
    style_name: &str,
    layout_uuid: Uuid,
    template_uuid: Uuid,
) -> String {
    let paper_id = book.paper_id();
    let slug = slugify(style_name);

    format!(
        "s = {{\n\
         \tid = \"{layout_uuid}\",\n\
         \tinternalName = \"{paper_id}_{slug}\",\n\
         \ttitle = \"{style_name}\",\n\
         \ttype = \"layoutStyle\",\n\
         \tvalue = {{\n\
         \t\tpaperId = \"{paper_id}\",\n\
         \t\tresources = \"{slug}\",\n\
         \t\tstyleName = \"{slug}\",\n\
         \t\ttemplateId = \"{template_uuid}\",\n\
         \t}},\n\
         \tversion = 0,\n\
         }}\n",
    )
}
