use pictor_ir::{EmissionTarget, Icon};

use super::attribute_object;
use crate::{
    ModuleFile, TargetEmitter,
    ast::{Export, Import},
    builder::CodeFragment,
    js::{single_quoted, template_text},
};

pub const DEFAULT_ELEMENT_PREFIX: &str = "f-icon";

/// lit custom elements, one class and registration per icon.
#[derive(Debug, Clone)]
pub struct ElementsEmitter {
    prefix: String,
}

impl ElementsEmitter {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Custom-element tag for `icon`, e.g. `f-icon-chevron-down16`.
    pub fn tag_name(&self, icon: &Icon) -> String {
        format!("{}-{}{}", self.prefix, icon.name(), icon.size())
    }
}

impl Default for ElementsEmitter {
    fn default() -> Self {
        Self::new(DEFAULT_ELEMENT_PREFIX)
    }
}

impl TargetEmitter for ElementsEmitter {
    fn target(&self) -> EmissionTarget {
        EmissionTarget::WebComponent
    }

    fn module(&self, icon: &Icon) -> ModuleFile {
        let class = &icon.export_name;
        let tag = single_quoted(&self.tag_name(icon));

        let body = vec![
            CodeFragment::block(
                "static _icon() {",
                vec![CodeFragment::line(format!(
                    "return svg`{}`;",
                    template_text(&icon.inner_markup)
                ))],
                "}",
            ),
            CodeFragment::block(
                "get attrs() {",
                vec![
                    CodeFragment::line(format!(
                        "const attrs = {};",
                        attribute_object(icon).build()
                    )),
                    CodeFragment::line(
                        "Array.from(this.attributes).forEach(({ nodeName, nodeValue }) => attrs[nodeName] = nodeValue);",
                    ),
                    CodeFragment::line(
                        "return Object.entries(attrs).map(([k, v]) => `${k}=\"${v}\"`).join(' ');",
                    ),
                ],
                "}",
            ),
            CodeFragment::line(
                "render() { return html`<svg ${this.attrs}>${this.constructor._icon()}</svg>`; }",
            ),
        ];

        ModuleFile::new()
            .import(Import::new("lit").named("LitElement").named("html").named("svg"))
            .declare_fragments(vec![CodeFragment::block(
                format!("export class {} extends LitElement {{", class),
                body,
                "}",
            )])
            .declare_fragments(vec![CodeFragment::block(
                format!("if (!customElements.get({})) {{", tag),
                vec![CodeFragment::line(format!(
                    "customElements.define({}, {});",
                    tag, class
                ))],
                "}",
            )])
    }

    fn index(&self, icons: &[&Icon]) -> ModuleFile {
        ModuleFile::new().exports(
            icons
                .iter()
                .map(|icon| Export::new().from(format!("./{}", self.module_file_name(icon)))),
        )
    }
}
