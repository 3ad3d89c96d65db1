//! Read-only phrasing tables the stages draw from.
//!
//! Every table is static data reached through an exhaustive `match` on the
//! brief's enums, so adding a tone or format fails to compile until its
//! templates exist.

pub mod channel;
pub mod skeleton;
pub mod tone;

pub use channel::*;
pub use skeleton::*;
pub use tone::*;

/// Values substituted into `{placeholder}` tokens of a template
#[derive(Debug, Clone, Copy)]
pub struct Slots<'a> {
    pub brand: &'a str,
    pub audience: &'a str,
    pub objective: &'a str,
    pub keyword: &'a str,
    pub format: &'a str,
    pub cta: &'a str,
}

/// Replace `{brand}`, `{audience}`, `{objective}`, `{keyword}`, `{format}`
/// and `{cta}` in a template. Unknown placeholders are left untouched.
pub fn fill(template: &str, slots: &Slots<'_>) -> String {
    let mut out = String::with_capacity(template.len() + 64);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };

        let name = &after[..close];
        match name {
            "brand" => out.push_str(slots.brand),
            "audience" => out.push_str(slots.audience),
            "objective" => out.push_str(slots.objective),
            "keyword" => out.push_str(slots.keyword),
            "format" => out.push_str(slots.format),
            "cta" => out.push_str(slots.cta),
            _ => {
                out.push('{');
                out.push_str(name);
                out.push('}');
            }
        }
        rest = &after[close + 1..];
    }

    out.push_str(rest);
    out
}
