//! Class-name dispatch
//!
//! The browser reports a class name (e.g. `"HTMLSelectElement"`) for every
//! remote node; this module maps that name to the matching typed wrapper.
//! [`create`] is the generic lookup-and-construct factory, [`TypedElement`]
//! the tagged-union form for callers that do not know the type up front.

use crate::elements::{
    HtmlAnchorElement, HtmlBodyElement, HtmlButtonElement, HtmlDivElement, HtmlElement,
    HtmlFormElement, HtmlHeadingElement, HtmlImageElement, HtmlInputElement, HtmlOptionElement,
    HtmlParagraphElement, HtmlSelectElement, HtmlSpanElement, HtmlTableCellElement,
    HtmlTableElement, HtmlTableRowElement, HtmlTableSectionElement, HtmlTextAreaElement,
};
use crate::error::{Error, Result};
use crate::handle::DomHandle;

/// Tag for each concretely mapped element class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementTag {
    /// `HTMLAnchorElement`
    Anchor,
    /// `HTMLBodyElement`
    Body,
    /// `HTMLButtonElement`
    Button,
    /// `HTMLDivElement`
    Div,
    /// `HTMLFormElement`
    Form,
    /// `HTMLHeadingElement`
    Heading,
    /// `HTMLImageElement`
    Image,
    /// `HTMLInputElement`
    Input,
    /// `HTMLParagraphElement`
    Paragraph,
    /// `HTMLSelectElement`
    Select,
    /// `HTMLOptionElement`
    SelectOption,
    /// `HTMLSpanElement`
    Span,
    /// `HTMLTableElement`
    Table,
    /// `HTMLTableCellElement`
    TableCell,
    /// `HTMLTableRowElement`
    TableRow,
    /// `HTMLTableSectionElement`
    TableSection,
    /// `HTMLTextAreaElement`
    TextArea,
    /// Any other `HTML*Element`
    Generic,
}

/// Class-name → tag dispatch table
static ELEMENT_TAGS: phf::Map<&'static str, ElementTag> = phf::phf_map! {
    "HTMLAnchorElement" => ElementTag::Anchor,
    "HTMLBodyElement" => ElementTag::Body,
    "HTMLButtonElement" => ElementTag::Button,
    "HTMLDivElement" => ElementTag::Div,
    "HTMLFormElement" => ElementTag::Form,
    "HTMLHeadingElement" => ElementTag::Heading,
    "HTMLImageElement" => ElementTag::Image,
    "HTMLInputElement" => ElementTag::Input,
    "HTMLOptionElement" => ElementTag::SelectOption,
    "HTMLParagraphElement" => ElementTag::Paragraph,
    "HTMLSelectElement" => ElementTag::Select,
    "HTMLSpanElement" => ElementTag::Span,
    "HTMLTableElement" => ElementTag::Table,
    "HTMLTableCellElement" => ElementTag::TableCell,
    "HTMLTableRowElement" => ElementTag::TableRow,
    "HTMLTableSectionElement" => ElementTag::TableSection,
    "HTMLTextAreaElement" => ElementTag::TextArea,
};

impl ElementTag {
    /// Map a browser-reported class name to a tag.
    ///
    /// Unmapped `HTML*Element` names fall back to [`ElementTag::Generic`];
    /// non-element class names yield `None`.
    pub fn from_class_name(class_name: &str) -> Option<Self> {
        if let Some(tag) = ELEMENT_TAGS.get(class_name) {
            return Some(*tag);
        }
        if class_name.starts_with("HTML") && class_name.ends_with("Element") {
            return Some(ElementTag::Generic);
        }
        None
    }
}

/// A typed wrapper over a [`DomHandle`]
pub trait TypedDomHandle: Sized + Send + Sync {
    /// Wrapper type name, used in mismatch errors
    const TYPE_NAME: &'static str;

    /// Whether this wrapper can represent the given browser class name
    fn accepts(class_name: &str) -> bool;

    /// Construct the wrapper. Callers go through [`create`], which checks
    /// [`accepts`](Self::accepts) first.
    fn from_handle(handle: DomHandle) -> Self;

    /// The wrapped handle
    fn handle(&self) -> &DomHandle;

    /// Unwrap into the underlying handle
    fn into_handle(self) -> DomHandle;
}

/// Construct a typed wrapper from a handle, validating the class name
pub fn create<T: TypedDomHandle>(handle: DomHandle) -> Result<T> {
    if T::accepts(handle.class_name()) {
        Ok(T::from_handle(handle))
    } else {
        Err(Error::type_mismatch(
            T::TYPE_NAME,
            handle.class_name().to_string(),
        ))
    }
}

/// Tagged-union form of the dispatch: one variant per concrete wrapper,
/// with unmapped element classes landing in [`TypedElement::Other`].
#[derive(Debug)]
pub enum TypedElement {
    /// Anchor element
    Anchor(HtmlAnchorElement),
    /// Body element
    Body(HtmlBodyElement),
    /// Button element
    Button(HtmlButtonElement),
    /// Div element
    Div(HtmlDivElement),
    /// Form element
    Form(HtmlFormElement),
    /// Heading element
    Heading(HtmlHeadingElement),
    /// Image element
    Image(HtmlImageElement),
    /// Input element
    Input(HtmlInputElement),
    /// Option element
    SelectOption(HtmlOptionElement),
    /// Paragraph element
    Paragraph(HtmlParagraphElement),
    /// Select element
    Select(HtmlSelectElement),
    /// Span element
    Span(HtmlSpanElement),
    /// Table element
    Table(HtmlTableElement),
    /// Table cell element
    TableCell(HtmlTableCellElement),
    /// Table row element
    TableRow(HtmlTableRowElement),
    /// Table section element
    TableSection(HtmlTableSectionElement),
    /// Text area element
    TextArea(HtmlTextAreaElement),
    /// Any other HTML element
    Other(HtmlElement),
}

impl TypedElement {
    /// Dispatch a handle to the matching wrapper variant
    pub fn from_handle(handle: DomHandle) -> Result<Self> {
        let Some(tag) = ElementTag::from_class_name(handle.class_name()) else {
            return Err(Error::type_mismatch(
                "TypedElement",
                handle.class_name().to_string(),
            ));
        };
        Ok(match tag {
            ElementTag::Anchor => TypedElement::Anchor(HtmlAnchorElement::from_handle(handle)),
            ElementTag::Body => TypedElement::Body(HtmlBodyElement::from_handle(handle)),
            ElementTag::Button => TypedElement::Button(HtmlButtonElement::from_handle(handle)),
            ElementTag::Div => TypedElement::Div(HtmlDivElement::from_handle(handle)),
            ElementTag::Form => TypedElement::Form(HtmlFormElement::from_handle(handle)),
            ElementTag::Heading => TypedElement::Heading(HtmlHeadingElement::from_handle(handle)),
            ElementTag::Image => TypedElement::Image(HtmlImageElement::from_handle(handle)),
            ElementTag::Input => TypedElement::Input(HtmlInputElement::from_handle(handle)),
            ElementTag::SelectOption => {
                TypedElement::SelectOption(HtmlOptionElement::from_handle(handle))
            }
            ElementTag::Paragraph => {
                TypedElement::Paragraph(HtmlParagraphElement::from_handle(handle))
            }
            ElementTag::Select => TypedElement::Select(HtmlSelectElement::from_handle(handle)),
            ElementTag::Span => TypedElement::Span(HtmlSpanElement::from_handle(handle)),
            ElementTag::Table => TypedElement::Table(HtmlTableElement::from_handle(handle)),
            ElementTag::TableCell => {
                TypedElement::TableCell(HtmlTableCellElement::from_handle(handle))
            }
            ElementTag::TableRow => TypedElement::TableRow(HtmlTableRowElement::from_handle(handle)),
            ElementTag::TableSection => {
                TypedElement::TableSection(HtmlTableSectionElement::from_handle(handle))
            }
            ElementTag::TextArea => TypedElement::TextArea(HtmlTextAreaElement::from_handle(handle)),
            ElementTag::Generic => TypedElement::Other(HtmlElement::from_handle(handle)),
        })
    }

    /// The tag this element dispatched to
    pub fn tag(&self) -> ElementTag {
        match self {
            TypedElement::Anchor(_) => ElementTag::Anchor,
            TypedElement::Body(_) => ElementTag::Body,
            TypedElement::Button(_) => ElementTag::Button,
            TypedElement::Div(_) => ElementTag::Div,
            TypedElement::Form(_) => ElementTag::Form,
            TypedElement::Heading(_) => ElementTag::Heading,
            TypedElement::Image(_) => ElementTag::Image,
            TypedElement::Input(_) => ElementTag::Input,
            TypedElement::SelectOption(_) => ElementTag::SelectOption,
            TypedElement::Paragraph(_) => ElementTag::Paragraph,
            TypedElement::Select(_) => ElementTag::Select,
            TypedElement::Span(_) => ElementTag::Span,
            TypedElement::Table(_) => ElementTag::Table,
            TypedElement::TableCell(_) => ElementTag::TableCell,
            TypedElement::TableRow(_) => ElementTag::TableRow,
            TypedElement::TableSection(_) => ElementTag::TableSection,
            TypedElement::TextArea(_) => ElementTag::TextArea,
            TypedElement::Other(_) => ElementTag::Generic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::MockRuntime;
    use std::sync::Arc;

    fn handle_for(class_name: &str) -> DomHandle {
        DomHandle::new(Arc::new(MockRuntime::new()), "obj-1", class_name)
    }

    #[test]
    fn test_dispatch_table_lookup() {
        assert_eq!(
            ElementTag::from_class_name("HTMLSelectElement"),
            Some(ElementTag::Select)
        );
        assert_eq!(
            ElementTag::from_class_name("HTMLTableRowElement"),
            Some(ElementTag::TableRow)
        );
    }

    #[test]
    fn test_unmapped_element_is_generic() {
        assert_eq!(
            ElementTag::from_class_name("HTMLCanvasElement"),
            Some(ElementTag::Generic)
        );
        assert_eq!(
            ElementTag::from_class_name("HTMLUnknownElement"),
            Some(ElementTag::Generic)
        );
    }

    #[test]
    fn test_non_element_class_has_no_tag() {
        assert_eq!(ElementTag::from_class_name("CSSStyleDeclaration"), None);
        assert_eq!(ElementTag::from_class_name("Window"), None);
    }

    #[test]
    fn test_create_matching_wrapper() {
        let button: HtmlButtonElement = create(handle_for("HTMLButtonElement")).unwrap();
        assert_eq!(button.handle().class_name(), "HTMLButtonElement");
    }

    #[test]
    fn test_create_accepts_generic_request() {
        // Requesting the generic wrapper works for any HTML element class.
        let element: HtmlElement = create(handle_for("HTMLButtonElement")).unwrap();
        assert_eq!(element.handle().class_name(), "HTMLButtonElement");
    }

    #[test]
    fn test_create_rejects_mismatch() {
        let result: Result<HtmlButtonElement> = create(handle_for("HTMLDivElement"));
        assert!(matches!(result, Err(Error::TypeMismatch { .. })));
    }

    #[test]
    fn test_typed_element_dispatch() {
        let typed = TypedElement::from_handle(handle_for("HTMLTableCellElement")).unwrap();
        assert_eq!(typed.tag(), ElementTag::TableCell);

        let other = TypedElement::from_handle(handle_for("HTMLVideoElement")).unwrap();
        assert_eq!(other.tag(), ElementTag::Generic);
    }
}
