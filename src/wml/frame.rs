use super::enums::{
    DropCap, FrameWrap, HeightRule, HorizontalAnchor, VerticalAnchor, XAlign, YAlign,
};
use crate::common::xml::{FromXml, ToXml, XmlElement, writer};
use crate::error::Result;
use crate::options::ParseOptions;
use serde::{Deserialize, Serialize};

/// Text frame positioning of a paragraph (`w:framePr`).
///
/// Measurements are in twips. Consecutive paragraphs with identical frame
/// properties share one frame, so this type compares by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FrameProperties {
    pub drop_cap: Option<DropCap>,
    /// Height of a drop cap in lines
    pub lines: Option<u32>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub v_space: Option<u32>,
    pub h_space: Option<u32>,
    pub wrap: Option<FrameWrap>,
    pub h_anchor: Option<HorizontalAnchor>,
    pub v_anchor: Option<VerticalAnchor>,
    /// Absolute horizontal offset from `h_anchor`
    pub x: Option<i32>,
    /// Relative horizontal position, overrides `x`
    pub x_align: Option<XAlign>,
    pub y: Option<i32>,
    pub y_align: Option<YAlign>,
    pub height_rule: Option<HeightRule>,
    pub anchor_lock: Option<bool>,
}

impl FrameProperties {
    /// Whether this frame is a drop cap rather than a positioned box.
    pub fn is_drop_cap(&self) -> bool {
        matches!(self.drop_cap, Some(DropCap::Drop | DropCap::Margin))
    }
}

impl FromXml for FrameProperties {
    fn from_xml(element: &XmlElement, options: &ParseOptions) -> Result<Self> {
        Ok(Self {
            drop_cap: element.attr_enum("dropCap", options)?,
            lines: element.attr_u32("lines", options)?,
            width: element.attr_u32("w", options)?,
            height: element.attr_u32("h", options)?,
            v_space: element.attr_u32("vSpace", options)?,
            h_space: element.attr_u32("hSpace", options)?,
            wrap: element.attr_enum("wrap", options)?,
            h_anchor: element.attr_enum("hAnchor", options)?,
            v_anchor: element.attr_enum("vAnchor", options)?,
            x: element.attr_i32("x", options)?,
            x_align: element.attr_enum("xAlign", options)?,
            y: element.attr_i32("y", options)?,
            y_align: element.attr_enum("yAlign", options)?,
            height_rule: element.attr_enum("hRule", options)?,
            anchor_lock: element.attr_on_off("anchorLock", options)?,
        })
    }
}

impl ToXml for FrameProperties {
    fn write_xml(&self, tag: &str, xml: &mut String) -> Result<()> {
        writer::open(xml, tag);
        writer::push_opt_enum_attr(xml, "w:dropCap", self.drop_cap);
        writer::push_opt_int_attr(xml, "w:lines", self.lines);
        writer::push_opt_int_attr(xml, "w:w", self.width);
        writer::push_opt_int_attr(xml, "w:h", self.height);
        writer::push_opt_int_attr(xml, "w:vSpace", self.v_space);
        writer::push_opt_int_attr(xml, "w:hSpace", self.h_space);
        writer::push_opt_enum_attr(xml, "w:wrap", self.wrap);
        writer::push_opt_enum_attr(xml, "w:hAnchor", self.h_anchor);
        writer::push_opt_enum_attr(xml, "w:vAnchor", self.v_anchor);
        writer::push_opt_int_attr(xml, "w:x", self.x);
        writer::push_opt_enum_attr(xml, "w:xAlign", self.x_align);
        writer::push_opt_int_attr(xml, "w:y", self.y);
        writer::push_opt_enum_attr(xml, "w:yAlign", self.y_align);
        writer::push_opt_enum_attr(xml, "w:hRule", self.height_rule);
        writer::push_opt_on_off_attr(xml, "w:anchorLock", self.anchor_lock);
        xml.push_str("/>");
        Ok(())
    }
}
