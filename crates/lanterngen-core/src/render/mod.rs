//! Fragment renderers turning function descriptors into generated lines.
pub mod kind;
pub mod lantern;

pub use kind::FragmentKind;

use crate::schema::{FunctionDescriptor, Schema};

/// Trait for rendering one function descriptor into one line of a fragment.
pub trait FragmentRenderer {
    /// Sentinel lines opening and closing the generated block.
    fn frame(&self) -> (&'static str, &'static str);

    fn render(&self, function: &FunctionDescriptor, prefix: &str) -> String;
}

/// Ordered lines of one generated block, frame lines included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFragment {
    pub kind: FragmentKind,
    pub lines: Vec<String>,
}

impl GeneratedFragment {
    /// Render every function of `schema`, in schema order, between the
    /// renderer's frame lines.
    pub fn render(kind: FragmentKind, schema: &Schema, prefix: &str) -> Self {
        let renderer = Self::get_renderer(kind);
        let (open, close) = renderer.frame();

        let mut lines = Vec::with_capacity(schema.len() + 2);
        lines.push(open.to_string());
        for function in schema {
            lines.push(renderer.render(function, prefix));
        }
        lines.push(close.to_string());

        Self { kind, lines }
    }

    pub fn get_renderer(kind: FragmentKind) -> Box<dyn FragmentRenderer> {
        match kind {
            FragmentKind::Declarations => Box::new(lantern::DeclarationRenderer),
            FragmentKind::Stubs => Box::new(lantern::StubRenderer),
            FragmentKind::Symbols => Box::new(lantern::SymbolRenderer),
        }
    }
}

/// All three fragments for one schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragments {
    pub declarations: GeneratedFragment,
    pub stubs: GeneratedFragment,
    pub symbols: GeneratedFragment,
}

impl Fragments {
    pub fn render(schema: &Schema, prefix: &str) -> Self {
        Self {
            declarations: GeneratedFragment::render(FragmentKind::Declarations, schema, prefix),
            stubs: GeneratedFragment::render(FragmentKind::Stubs, schema, prefix),
            symbols: GeneratedFragment::render(FragmentKind::Symbols, schema, prefix),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> Schema {
        Schema::new(vec![
            FunctionDescriptor::new("Zeta", ["z"]),
            FunctionDescriptor::new("Alpha", Vec::<String>::new()),
        ])
    }

    #[test]
    fn test_fragment_keeps_schema_order() {
        let fragment = GeneratedFragment::render(FragmentKind::Stubs, &schema(), "lantern_");
        assert_eq!(
            fragment.lines,
            vec![
                "/*",
                "void lantern_zeta(void* z, const char* zType) {}",
                "void lantern_alpha() {}",
                "*/",
            ]
        );
    }

    #[test]
    fn test_empty_schema_renders_frame_only() {
        let fragments = Fragments::render(&Schema::default(), "lantern_");
        assert_eq!(fragments.declarations.lines, vec!["/*", "*/"]);
        assert_eq!(fragments.stubs.lines, vec!["/*", "*/"]);
        assert_eq!(fragments.symbols.lines, vec!["  /*", "  */"]);
    }

    #[test]
    fn test_naming_is_shared_by_all_fragments() {
        let schema = Schema::new(vec![FunctionDescriptor::new("DoThing", ["a"])]);
        let fragments = Fragments::render(&schema, "lantern_");
        for fragment in [&fragments.declarations, &fragments.stubs, &fragments.symbols] {
            assert_eq!(fragment.lines.len(), 3);
            assert!(
                fragment.lines[1].contains("lantern_dothing"),
                "{}: {}",
                fragment.kind,
                fragment.lines[1]
            );
        }
        assert_eq!(fragments.declarations.kind, FragmentKind::Declarations);
        assert_eq!(fragments.symbols.kind, FragmentKind::Symbols);
    }
}
