//! The component emitter.
//!
//! Combines the sanitizers, the interaction collector, and the two
//! renderers into the four artifacts of one Angular component. Pure
//! string assembly; persistence belongs to the caller.

use trellis_core::DesignNode;

use crate::interactions::synthesize_methods;
use crate::markup::render_markup;
use crate::sanitize;
use crate::style::render_stylesheet;

/// Generated output for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentBundle {
    /// Component type name (`SubmitFlow`).
    pub component_name: String,
    /// Directory and file-stem name (`submit-flow`).
    pub dir_name: String,
    /// `{dir}.component.ts` content.
    pub behavior_source: String,
    /// `{dir}.component.html` content.
    pub markup_source: String,
    /// `{dir}.component.scss` content.
    pub style_source: String,
    /// `{dir}.module.ts` content.
    pub manifest_source: String,
}

impl ComponentBundle {
    /// File names and contents in a fixed order, ready to persist.
    pub fn files(&self) -> [(String, &str); 4] {
        [
            (
                format!("{}.component.ts", self.dir_name),
                self.behavior_source.as_str(),
            ),
            (
                format!("{}.component.html", self.dir_name),
                self.markup_source.as_str(),
            ),
            (
                format!("{}.component.scss", self.dir_name),
                self.style_source.as_str(),
            ),
            (
                format!("{}.module.ts", self.dir_name),
                self.manifest_source.as_str(),
            ),
        ]
    }
}

/// Emit the component bundle for one frame subtree.
///
/// Deterministic: emitting the same tree twice yields byte-identical
/// artifacts.
pub fn emit_component(frame: &DesignNode) -> ComponentBundle {
    let component_name = guarded_name(&frame.name);
    let dir_name = sanitize::dash_case(&component_name);

    ComponentBundle {
        behavior_source: behavior_source(frame, &component_name, &dir_name),
        markup_source: markup_source(frame),
        style_source: render_stylesheet(frame),
        manifest_source: manifest_source(&component_name, &dir_name),
        component_name,
        dir_name,
    }
}

/// The sanitizer alone does not promise a valid TypeScript identifier;
/// an empty or digit-leading result gets a `Screen` prefix here.
fn guarded_name(raw: &str) -> String {
    let name = sanitize::component_name(raw);
    if name.is_empty() || name.starts_with(|ch: char| ch.is_ascii_digit()) {
        format!("Screen{name}")
    } else {
        name
    }
}

fn behavior_source(frame: &DesignNode, component_name: &str, dir_name: &str) -> String {
    let methods: String = synthesize_methods(frame)
        .iter()
        .map(|method| format!("\n{}", method.to_source()))
        .collect();

    format!(
        r#"import {{ Component, OnInit }} from '@angular/core';

@Component({{
  selector: 'app-{dir_name}',
  templateUrl: './{dir_name}.component.html',
  styleUrls: ['./{dir_name}.component.scss']
}})
export class {component_name}Component implements OnInit {{

  constructor() {{ }}

  ngOnInit(): void {{
  }}
{methods}}}
"#
    )
}

fn markup_source(frame: &DesignNode) -> String {
    format!(
        "<div class=\"frame-container\">\n{}</div>\n",
        render_markup(frame, 1)
    )
}

fn manifest_source(component_name: &str, dir_name: &str) -> String {
    format!(
        r#"import {{ NgModule }} from '@angular/core';
import {{ CommonModule }} from '@angular/common';
import {{ {component_name}Component }} from './{dir_name}.component';

@NgModule({{
  declarations: [
    {component_name}Component
  ],
  imports: [
    CommonModule
  ],
  exports: [
    {component_name}Component
  ]
}})
export class {component_name}Module {{ }}
"#
    )
}
