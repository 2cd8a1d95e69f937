use glyph_wrap::layout::layout_text;
use glyph_wrap::{Alignment, BaselinePolicy, Font, LayoutParameters, Pt};

fn main() {
    // load a font to measure and outline with
    let font = include_bytes!("../assets/DejaVuSans.ttf");
    let font = Font::load(font.to_vec()).expect("can load font");

    let alignment = std::env::args()
        .nth(1)
        .map(|a| a.parse::<Alignment>().expect("valid alignment"))
        .unwrap_or_default();

    let params = LayoutParameters::builder(Pt(300.0), Pt(15.0))
        .line_spacing(Pt(5.0))
        .alignment(alignment)
        .baseline(BaselinePolicy::svg_calibrated())
        .build()
        .expect("valid parameters");

    let text = lipsum::lipsum(60);
    let result = layout_text(&text, &params, &font).expect("can lay out text");

    println!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = result.width.ceil(),
        h = result.height.ceil()
    );
    for line in result.lines.iter() {
        println!(r#"  <path d="{}"/>"#, line.glyphs.path.to_svg_data(1));
    }
    println!("</svg>");
}
