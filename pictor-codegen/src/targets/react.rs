use pictor_ir::{EmissionTarget, Icon};

use super::attribute_object;
use crate::{
    ModuleFile, TargetEmitter,
    ast::{Const, Export, Import, ObjectLiteral},
};

/// React function components built with `React.createElement`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReactEmitter;

impl TargetEmitter for ReactEmitter {
    fn target(&self) -> EmissionTarget {
        EmissionTarget::ComponentGraph
    }

    fn module(&self, icon: &Icon) -> ModuleFile {
        let inner_html = ObjectLiteral::new().string("__html", &icon.inner_markup);
        let props = attribute_object(icon)
            .raw("dangerouslySetInnerHTML", inner_html.build())
            .spread("attrs")
            .trailing_comma();
        // Const appends the statement terminator.
        let component = format!("(attrs) => React.createElement('svg', {})", props.build());

        ModuleFile::new()
            .import(Import::new("react").default("React"))
            .declare(Const::new(&icon.export_name, component))
    }

    fn index(&self, icons: &[&Icon]) -> ModuleFile {
        ModuleFile::new().exports(icons.iter().map(|icon| {
            Export::new()
                .from(format!("./{}", self.module_file_name(icon)))
                .without_semicolon()
        }))
    }
}
