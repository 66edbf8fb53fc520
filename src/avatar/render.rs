//! SVG rendering of an [`AvatarDescriptor`].

use super::{descriptor::AvatarDescriptor, hash::seed, SIZE};

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Pixel width and height. Without it the SVG scales to its container.
    pub size: Option<u32>,
}

/// Render `avatar` as a standalone SVG document titled `name`.
pub fn render_svg(avatar: &AvatarDescriptor, name: &str, options: RenderOptions) -> String {
    let half = SIZE / 2;
    let mask_id = format!("mask__beam-{}", seed(name));
    let title = escape_xml(name);

    let dimensions = match options.size {
        Some(px) => format!(r#" width="{px}" height="{px}""#),
        None => String::new(),
    };

    let wrapper_transform = format!(
        "translate({} {}) rotate({} {half} {half}) scale({})",
        avatar.wrapper_translate_x,
        avatar.wrapper_translate_y,
        avatar.wrapper_rotate,
        avatar.wrapper_scale,
    );
    let wrapper_radius = if avatar.is_circle { SIZE } else { SIZE / 6 };

    let face_transform = format!(
        "translate({} {}) rotate({} {half} {half})",
        avatar.face_translate_x, avatar.face_translate_y, avatar.face_rotate,
    );

    let mut svg = String::with_capacity(1024);

    svg.push_str(&format!(
        r#"<svg viewBox="0 0 {SIZE} {SIZE}" fill="none" role="img" xmlns="http://www.w3.org/2000/svg"{dimensions}>"#
    ));
    svg.push_str(&format!("<title>{title}</title>"));
    svg.push_str(&format!(
        r##"<mask id="{mask_id}" maskUnits="userSpaceOnUse" x="0" y="0" width="{SIZE}" height="{SIZE}"><rect width="{SIZE}" height="{SIZE}" rx="{}" fill="#FFFFFF"/></mask>"##,
        SIZE * 2
    ));
    svg.push_str(&format!(r#"<g mask="url(#{mask_id})">"#));
    svg.push_str(&format!(
        r#"<rect width="{SIZE}" height="{SIZE}" fill="{}"/>"#,
        avatar.background_color
    ));
    svg.push_str(&format!(
        r#"<rect x="0" y="0" width="{SIZE}" height="{SIZE}" transform="{wrapper_transform}" fill="{}" rx="{wrapper_radius}"/>"#,
        avatar.wrapper_color
    ));
    svg.push_str(&format!(r#"<g transform="{face_transform}">"#));
    svg.push_str(&mouth(avatar));
    for x in [14.0 - eye(avatar), 20.0 + eye(avatar)] {
        svg.push_str(&format!(
            r#"<rect x="{x}" y="14" width="1.5" height="2" rx="1" stroke="none" fill="{}"/>"#,
            avatar.face_color
        ));
    }
    svg.push_str("</g></g></svg>");

    svg
}

fn eye(avatar: &AvatarDescriptor) -> f64 {
    f64::from(avatar.eye_spread)
}

fn mouth(avatar: &AvatarDescriptor) -> String {
    let y = 19 + avatar.mouth_spread;

    if avatar.is_mouth_open {
        format!(
            r#"<path d="M15 {y}c2 1 4 1 6 0" stroke="{}" fill="none" stroke-linecap="round"/>"#,
            avatar.face_color
        )
    } else {
        format!(
            r#"<path d="M13,{y} a1,0.75 0 0,0 10,0" fill="{}"/>"#,
            avatar.face_color
        )
    }
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
