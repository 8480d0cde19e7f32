//! User-facing message catalogue

use crate::selection::FlowMessages;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported interface languages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Es];

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
        }
    }

    pub fn messages(self) -> &'static Messages {
        match self {
            Locale::En => &EN,
            Locale::Es => &ES,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Message templates. `{name}` placeholders are filled with [`fill`].
#[derive(Debug)]
pub struct Messages {
    pub loading: &'static str,
    pub load_failed: &'static str,
    pub init_hint: &'static str,
    pub select_types: &'static str,
    pub select_groups: &'static str,
    pub all_groups: &'static str,
    pub select_items: &'static str,
    pub whole_group: &'static str,
    pub group_size: &'static str,
    pub empty_selection: &'static str,
    pub selected: &'static str,
    pub nothing_selected: &'static str,
    pub bundle_prompt: &'static str,
    pub written: &'static str,
    pub cancelled: &'static str,
    pub done: &'static str,
    pub created: &'static str,
    pub exists: &'static str,
    pub sample_written: &'static str,
    pub init_done: &'static str,
    pub list_heading: &'static str,
    pub ungrouped: &'static str,
    pub config_heading: &'static str,
}

impl Messages {
    /// Strings for the selection flow prompts
    pub fn flow(&self) -> FlowMessages {
        FlowMessages {
            select_types: self.select_types.to_string(),
            select_groups: self.select_groups.to_string(),
            all_groups: self.all_groups.to_string(),
            select_items: self.select_items.to_string(),
            whole_group: self.whole_group.to_string(),
            group_size: self.group_size.to_string(),
            empty_selection: self.empty_selection.to_string(),
        }
    }
}

/// Substitute `{key}` placeholders
pub fn fill(template: &str, values: &[(&str, &str)]) -> String {
    values
        .iter()
        .fold(template.to_string(), |acc, (key, value)| {
            acc.replace(&format!("{{{key}}}"), value)
        })
}

static EN: Messages = Messages {
    loading: "Loading components...",
    load_failed: "Could not load components",
    init_hint: "Run `snipcraft init` to create the project layout",
    select_types: "Select component types",
    select_groups: "Select groups",
    all_groups: "All groups",
    select_items: "Select components",
    whole_group: "All of {group}",
    group_size: "components: {count}",
    empty_selection: "Select at least one option",
    selected: "Selected {count} components",
    nothing_selected: "No components selected. Nothing written.",
    bundle_prompt: "Bundle components of the same type into one file?",
    written: "Wrote {count} files to {dir}",
    cancelled: "Cancelled. No files were written.",
    done: "Done!",
    created: "Created {path}",
    exists: "{path} already exists",
    sample_written: "Wrote sample component {path}",
    init_done: "Project ready",
    list_heading: "Available components",
    ungrouped: "(ungrouped)",
    config_heading: "Configuration",
};

static ES: Messages = Messages {
    loading: "Cargando componentes...",
    load_failed: "No se pudieron cargar los componentes",
    init_hint: "Ejecuta `snipcraft init` para crear la estructura del proyecto",
    select_types: "Selecciona los tipos de componente",
    select_groups: "Selecciona los grupos",
    all_groups: "Todos los grupos",
    select_items: "Selecciona los componentes",
    whole_group: "Todo {group}",
    group_size: "componentes: {count}",
    empty_selection: "Selecciona al menos una opción",
    selected: "{count} componentes seleccionados",
    nothing_selected: "Ningún componente seleccionado. No se escribió nada.",
    bundle_prompt: "¿Agrupar los componentes del mismo tipo en un solo archivo?",
    written: "{count} archivos escritos en {dir}",
    cancelled: "Cancelado. No se escribió ningún archivo.",
    done: "¡Listo!",
    created: "Creado {path}",
    exists: "{path} ya existe",
    sample_written: "Componente de ejemplo escrito en {path}",
    init_done: "Proyecto listo",
    list_heading: "Componentes disponibles",
    ungrouped: "(sin grupo)",
    config_heading: "Configuración",
};
