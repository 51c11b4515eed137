use pictor_ir::{EmissionTarget, Icon};

use super::attribute_object;
use crate::{
    ModuleFile, TargetEmitter,
    ast::{Export, Import},
    js::single_quoted,
};

/// Vue functional components, exported as each module's default.
#[derive(Debug, Clone, Copy, Default)]
pub struct VueEmitter;

impl TargetEmitter for VueEmitter {
    fn target(&self) -> EmissionTarget {
        EmissionTarget::Template
    }

    fn module(&self, icon: &Icon) -> ModuleFile {
        let props = attribute_object(icon)
            .raw("innerHTML", single_quoted(&icon.inner_markup))
            .spread("attrs");

        ModuleFile::new()
            .import(Import::new("vue").named("h").without_semicolon())
            .export(
                Export::new()
                    .default_export(format!("(_, {{ attrs }}) => h('svg', {})", props.build()))
                    .without_semicolon(),
            )
    }

    fn index(&self, icons: &[&Icon]) -> ModuleFile {
        ModuleFile::new().exports(icons.iter().map(|icon| {
            Export::new()
                .from(format!("./{}", self.module_file_name(icon)))
                .named_as("default", &icon.export_name)
                .without_semicolon()
        }))
    }
}
