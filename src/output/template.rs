// Fri Feb 06 2026 - Alex

use crate::generate::{EnumerationArguments, StructureArguments};
use std::collections::HashMap;

const STRUCTURE_TEMPLATE: &str = "\
package {{package}};

import java.lang.foreign.*;

import static java.lang.foreign.ValueLayout.*;

/** Generated binding, do not edit. */
public final class {{name}} {
    public static final MemoryLayout LAYOUT = {{layout}};

{{fields}}
}
";

const ENUMERATION_TEMPLATE: &str = "\
package {{package}};

/** Generated binding, do not edit. */
public enum {{name}} {
{{constants}};

    public final int value;

    {{name}}(int value) {
        this.value = value;
    }
}
";

/// Minimal `{{var}}` substitution engine for the built-in source
/// templates.
pub struct Template {
    variables: HashMap<String, String>,
}

impl Template {
    pub fn new() -> Self {
        Self {
            variables: HashMap::new(),
        }
    }

    pub fn set(&mut self, name: &str, value: &str) {
        self.variables.insert(name.to_string(), value.to_string());
    }

    pub fn render(&self, template: &str) -> String {
        let mut rendered = template.to_string();
        for (name, value) in &self.variables {
            rendered = rendered.replace(&format!("{{{{{}}}}}", name), value);
        }
        rendered
    }

    /// Source file for one generated structure.
    pub fn structure_source(arguments: &StructureArguments, package: &str) -> String {
        let fields = arguments
            .fields
            .iter()
            .map(|field| format!("    // {} {}", field.type_name, field.name))
            .collect::<Vec<_>>()
            .join("\n");

        let layout = indent_continuations(&arguments.layout_source, "    ");

        let mut template = Template::new();
        template.set("package", package);
        template.set("name", &arguments.class_name);
        template.set("layout", &layout);
        template.set("fields", &fields);
        template.render(STRUCTURE_TEMPLATE)
    }

    /// Source file for one generated enumeration.
    pub fn enumeration_source(arguments: &EnumerationArguments, package: &str) -> String {
        let constants = arguments
            .constants
            .iter()
            .map(|constant| format!("    {}({})", constant.name, constant.value))
            .collect::<Vec<_>>()
            .join(",\n");

        let mut template = Template::new();
        template.set("package", package);
        template.set("name", &arguments.class_name);
        template.set("constants", &constants);
        template.render(ENUMERATION_TEMPLATE)
    }
}

impl Default for Template {
    fn default() -> Self {
        Self::new()
    }
}

/// Re-indents the continuation lines of a rendered layout so it nests
/// inside the class body.
fn indent_continuations(source: &str, indent: &str) -> String {
    let mut lines = source.lines();
    let mut out = String::new();
    if let Some(first) = lines.next() {
        out.push_str(first);
    }
    for line in lines {
        out.push('\n');
        out.push_str(indent);
        out.push_str(line);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::{EnumerationConstant, FieldDeclaration};

    #[test]
    fn test_substitution() {
        let mut template = Template::new();
        template.set("name", "VkExtent2D");
        assert_eq!(template.render("class {{name}} {}"), "class VkExtent2D {}");
    }

    #[test]
    fn test_structure_source() {
        let arguments = StructureArguments {
            class_name: "VkExtent2D".to_string(),
            fields: vec![
                FieldDeclaration {
                    type_name: "int".to_string(),
                    name: "width".to_string(),
                },
                FieldDeclaration {
                    type_name: "int".to_string(),
                    name: "height".to_string(),
                },
            ],
            layout_source: "MemoryLayout.structLayout(\n  JAVA_INT.withName(\"width\"),\n  JAVA_INT.withName(\"height\")\n)".to_string(),
        };
        let source = Template::structure_source(&arguments, "vulkan.bindings");
        assert!(source.contains("package vulkan.bindings;"));
        assert!(source.contains("public final class VkExtent2D {"));
        assert!(source.contains("    JAVA_INT.withName(\"width\"),"));
        assert!(source.contains("    // int width"));
    }

    #[test]
    fn test_enumeration_source() {
        let arguments = EnumerationArguments {
            class_name: "VkFilter".to_string(),
            flags_name: None,
            constants: vec![
                EnumerationConstant {
                    name: "Nearest".to_string(),
                    value: 0,
                },
                EnumerationConstant {
                    name: "Linear".to_string(),
                    value: 1,
                },
            ],
        };
        let source = Template::enumeration_source(&arguments, "vulkan.bindings");
        assert!(source.contains("public enum VkFilter {"));
        assert!(source.contains("    Nearest(0),\n    Linear(1);"));
    }
}
