//! Renderers for the Lantern C ABI: `LANTERN_API` function pointers, empty
//! stubs and `LOAD_SYMBOL` loaders.

use super::FragmentRenderer;
use crate::schema::{ArgumentDescriptor, FunctionDescriptor};
use crate::utils::{join_parts, to_function_name};

/// `LANTERN_API void (LANTERN_PTR lantern_foo)(void* x, const char* xType);`
#[derive(Debug, Clone)]
pub struct DeclarationRenderer;

/// `void lantern_foo(void* x, const char* xType) {}`
#[derive(Debug, Clone)]
pub struct StubRenderer;

/// `  LOAD_SYMBOL(lantern_foo)`
#[derive(Debug, Clone)]
pub struct SymbolRenderer;

impl FragmentRenderer for DeclarationRenderer {
    fn frame(&self) -> (&'static str, &'static str) {
        ("/*", "*/")
    }

    fn render(&self, function: &FunctionDescriptor, prefix: &str) -> String {
        format!(
            "LANTERN_API void (LANTERN_PTR {})({});",
            to_function_name(prefix, &function.name),
            render_arguments(&function.arguments)
        )
    }
}

impl FragmentRenderer for StubRenderer {
    fn frame(&self) -> (&'static str, &'static str) {
        ("/*", "*/")
    }

    fn render(&self, function: &FunctionDescriptor, prefix: &str) -> String {
        format!(
            "void {}({}) {{}}",
            to_function_name(prefix, &function.name),
            render_arguments(&function.arguments)
        )
    }
}

impl FragmentRenderer for SymbolRenderer {
    fn frame(&self) -> (&'static str, &'static str) {
        ("  /*", "  */")
    }

    fn render(&self, function: &FunctionDescriptor, prefix: &str) -> String {
        format!("  LOAD_SYMBOL({})", to_function_name(prefix, &function.name))
    }
}

/// Each argument becomes an opaque handle plus a type tag named after it.
pub fn render_arguments(arguments: &[ArgumentDescriptor]) -> String {
    join_parts(
        arguments.iter().flat_map(|arg| {
            [
                format!("void* {}", arg.name),
                format!("const char* {}Type", arg.name),
            ]
        }),
        ", ",
    )
}
