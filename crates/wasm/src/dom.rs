//! [`Surface`] over the live browser DOM.

use folio_core::scenes::SVG_NS;
use folio_core::{Surface, SurfaceError};
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

pub struct DomSurface {
    document: Document,
}

impl DomSurface {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

fn call_failed(err: JsValue) -> SurfaceError {
    SurfaceError::Call(format!("{err:?}"))
}

impl Surface for DomSurface {
    type Node = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn create_element(&mut self, tag: &str) -> Result<Element, SurfaceError> {
        self.document
            .create_element_ns(Some(SVG_NS), tag)
            .map_err(call_failed)
    }

    fn append_child(&mut self, parent: &Element, child: &Element) -> Result<(), SurfaceError> {
        parent.append_child(child).map(|_| ()).map_err(call_failed)
    }

    fn replace_children(
        &mut self,
        parent: &Element,
        children: &[Element],
    ) -> Result<(), SurfaceError> {
        let nodes: js_sys::Array = children.iter().collect();
        parent.replace_children_with_node(&nodes);
        Ok(())
    }

    fn remove_attribute(&mut self, node: &Element, name: &str) -> Result<(), SurfaceError> {
        node.remove_attribute(name).map_err(call_failed)
    }

    fn set_attribute(&mut self, node: &Element, name: &str, value: &str) -> Result<(), SurfaceError> {
        node.set_attribute(name, value).map_err(call_failed)
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn set_text(&mut self, node: &Element, text: &str) -> Result<(), SurfaceError> {
        node.set_text_content(Some(text));
        Ok(())
    }
}
