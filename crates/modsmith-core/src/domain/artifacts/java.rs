//! Java entry point stub.

use crate::domain::entities::{EntityDefinition, ModConfiguration};

/// Source path of the entry point class, relative to the project root.
pub fn entrypoint_path(config: &ModConfiguration) -> String {
    format!(
        "src/main/java/{}/{}.java",
        config.mod_id(),
        config.entrypoint_class()
    )
}

/// A `ModInitializer` that prints one line per registered block and item.
pub fn entrypoint_source(
    config: &ModConfiguration,
    blocks: &[EntityDefinition],
    items: &[EntityDefinition],
) -> String {
    let mut out = format!(
        "package {};\n\nimport net.fabricmc.api.ModInitializer;\n\n",
        config.mod_id()
    );
    out.push_str(&format!(
        "public class {} implements ModInitializer {{\n",
        config.entrypoint_class()
    ));
    out.push_str("    @Override\n");
    out.push_str("    public void onInitialize() {\n");
    out.push_str(&format!(
        "        System.out.println(\"Loading {}...\");\n",
        escape(config.mod_name())
    ));
    out.push_str("        registerBlocks();\n");
    out.push_str("        registerItems();\n");
    out.push_str("    }\n\n");

    push_register_method(&mut out, "registerBlocks", "block", blocks);
    out.push('\n');
    push_register_method(&mut out, "registerItems", "item", items);
    out.push_str("}\n");
    out
}

fn push_register_method(out: &mut String, method: &str, kind: &str, entities: &[EntityDefinition]) {
    out.push_str(&format!("    private void {method}() {{\n"));
    for entity in entities {
        out.push_str(&format!(
            "        System.out.println(\"Registering {kind}: {} ({})\");\n",
            escape(entity.display_name()),
            escape(entity.internal_id())
        ));
    }
    out.push_str("    }\n");
}

/// Escape for a Java string literal.
fn escape(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ModConfiguration {
        ModConfiguration::builder("Example Mod", "examplemod")
            .build()
            .unwrap()
    }

    #[test]
    fn one_println_per_entity_in_order() {
        let blocks = [
            EntityDefinition::block("ruby", "Ruby Block", "ruby.png", "misc"),
            EntityDefinition::block("jade", "Jade Block", "jade.png", "misc"),
        ];
        let items = [EntityDefinition::item("my_item", "My Item", "example.png", "misc")];
        let source = entrypoint_source(&config(), &blocks, &items);

        assert!(source.starts_with("package examplemod;\n"));
        assert!(source.contains("public class Examplemod implements ModInitializer {"));
        let ruby = source
            .find("System.out.println(\"Registering block: Ruby Block (ruby)\");")
            .unwrap();
        let jade = source
            .find("System.out.println(\"Registering block: Jade Block (jade)\");")
            .unwrap();
        let item = source
            .find("System.out.println(\"Registering item: My Item (my_item)\");")
            .unwrap();
        assert!(ruby < jade && jade < item);
        assert!(source.ends_with("    }\n}\n"));
    }

    #[test]
    fn empty_lists_still_declare_both_methods() {
        let source = entrypoint_source(&config(), &[], &[]);
        assert!(source.contains("    private void registerBlocks() {\n    }\n"));
        assert!(source.contains("    private void registerItems() {\n    }\n"));
        assert!(source.contains("System.out.println(\"Loading Example Mod...\");"));
    }

    #[test]
    fn display_names_are_escaped() {
        let items = [EntityDefinition::item("q", "The \"Quote\"", "q.png", "misc")];
        let source = entrypoint_source(&config(), &[], &items);
        assert!(source.contains(r#"Registering item: The \"Quote\" (q)"#));
    }

    #[test]
    fn path_uses_capitalized_class() {
        assert_eq!(
            entrypoint_path(&config()),
            "src/main/java/examplemod/Examplemod.java"
        );
    }
}
