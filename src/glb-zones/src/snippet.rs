//! TypeScript `zones` array for the viewer's mock data module

use crate::zone::ZoneRecord;

/// Default snippet file name
pub const SNIPPET_FILE: &str = "zones.ts";

/// Marker colours, cycled by zone index
pub const PALETTE: [&str; 12] = [
    "#0066cc", "#00cc66", "#cc6600", "#cc0066", "#ffaa00", "#9933cc", "#33cccc", "#ff6b6b",
    "#4ecdc4", "#45b7d1", "#96ceb4", "#ffeaa7",
];

/// Zone type written for every entry; edited by hand afterwards
const DEFAULT_ZONE_TYPE: &str = "conference";

pub fn color_for(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// Render `export const zones: Zone[] = [...]` with viewer-space positions
pub fn typescript(zones: &[ZoneRecord]) -> String {
    let mut out = String::from("export const zones: Zone[] = [\n");

    for (i, zone) in zones.iter().enumerate() {
        let p = zone.position;
        let separator = if i + 1 < zones.len() { "," } else { "" };

        out.push_str("  {\n");
        out.push_str(&format!("    id: {},\n", quote(&zone.id)));
        out.push_str(&format!("    name: {},\n", quote(&zone.display_name)));
        out.push_str(&format!("    color: {},\n", quote(color_for(i))));
        out.push_str(&format!("    position: [{:?}, {:?}, {:?}],\n", p.x, p.y, p.z));
        out.push_str(&format!(
            "    description: {},\n",
            quote(&format!("Description of {}", zone.display_name))
        ));
        out.push_str(&format!("    type: {}\n", quote(DEFAULT_ZONE_TYPE)));
        out.push_str(&format!("  }}{}\n", separator));
    }

    out.push_str("];\n");
    out
}

/// Single-quoted TypeScript string literal
fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}
