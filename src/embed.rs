//! The resource-embedding pipeline: `@embutir("path")` inlines a file's
//! bytes into the final binary via the assembler's `.incbin`, addressable
//! at runtime through a pair of linker-generated labels.

use crate::ast::Embed;
use crate::lowering::LoweringState;

/// Derives the C-safe symbol stem for a path: every non-alphanumeric byte
/// becomes `_`. `"assets/hi.txt"` -> `"assets_hi_txt"`.
fn sanitize_path(path: &str) -> String {
    path.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// Resolves `path` relative to the importing source file's directory,
/// appends the `.incbin` triple to the asm sink, and returns a C block
/// expression that `extern`s the label pair and builds a dynamic string
/// over the embedded byte range.
pub fn lower_embed(embed: &Embed, state: &mut LoweringState) -> String {
    let resolved = state.source_dir.join(&embed.path);
    let resolved_display = resolved
        .canonicalize()
        .unwrap_or(resolved)
        .to_string_lossy()
        .into_owned();

    let sanitized = sanitize_path(&embed.path);
    let start_sym = format!("_binary_{sanitized}_start");
    let end_sym = format!("_binary_{sanitized}_end");

    state.asm.write_line(&format!(".global {start_sym}"));
    state.asm.write_line(&format!("{start_sym}:"));
    state.asm.write_line(&format!(
        "    .incbin \"{}\"",
        crate::lowering::escape_c_string(&resolved_display)
    ));
    state.asm.write_line(&format!("{end_sym}:"));
    state.asm.write_line("    .byte 0");

    let id = state.next_temp();
    format!(
        "({{ extern char {start_sym}[]; extern char {end_sym}[]; \
         sds _s{id} = sdsnewlen({start_sym}, {end_sym} - {start_sym}); _s{id}; }})"
    )
}
