/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use crate::{
    builder::{CacheStoreBuilder, NodeStoreBuilder, ValueStoreBuilder},
    RegisterDescription,
};

use super::{
    elem_name::{
        MAJOR_VERSION, MINOR_VERSION, MODEL_NAME, PRODUCT_GUID, REGISTER_DESCRIPTION,
        SCHEMA_MAJOR_VERSION, SCHEMA_MINOR_VERSION, SCHEMA_SUB_MINOR_VERSION,
        STANDARD_NAME_SPCACE, SUB_MINOR_VERSION, TOOL_TIP, VENDOR_NAME, VERSION_GUID,
    },
    elem_type::convert_to_uint,
    xml, Parse,
};

impl Parse for RegisterDescription {
    fn parse(
        node: &mut xml::Node,
        _: &mut impl NodeStoreBuilder,
        _: &mut impl ValueStoreBuilder,
        _: &mut impl CacheStoreBuilder,
    ) -> Self {
        debug_assert_eq!(node.tag_name(), REGISTER_DESCRIPTION);

        let model_name = node.attribute_of(MODEL_NAME).unwrap().into();
        let vendor_name = node.attribute_of(VENDOR_NAME).unwrap().into();
        let tooltip = node.attribute_of(TOOL_TIP).map(Into::into);
        let standard_name_space = node.attribute_of(STANDARD_NAME_SPCACE).unwrap().into();

        let schema_major_version = convert_to_uint(node.attribute_of(SCHEMA_MAJOR_VERSION).unwrap());
        let schema_minor_version = convert_to_uint(node.attribute_of(SCHEMA_MINOR_VERSION).unwrap());
        let schema_subminor_version =
            convert_to_uint(node.attribute_of(SCHEMA_SUB_MINOR_VERSION).unwrap());

        let major_version = convert_to_uint(node.attribute_of(MAJOR_VERSION).unwrap());
        let minor_version = convert_to_uint(node.attribute_of(MINOR_VERSION).unwrap());
        let subminor_version = convert_to_uint(node.attribute_of(SUB_MINOR_VERSION).unwrap());

        let product_guid = node.attribute_of(PRODUCT_GUID).unwrap().into();
        let version_guid = node.attribute_of(VERSION_GUID).unwrap().into();

        Self {
            model_name,
            vendor_name,
            tooltip,
            standard_name_space,
            schema_major_version,
            schema_minor_version,
            schema_subminor_version,
            major_version,
            minor_version,
            subminor_version,
            product_guid,
            version_guid,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::elem_type::StandardNameSpace;

    use super::{
        super::{utils::tests::parse_default, xml},
        *,
    };

    #[test]
    fn test_register_description() {
        let xml = r#"
        <RegisterDescription
          ModelName="TestModel"
          VendorName="TestVendor"
          StandardNameSpace="None"
          SchemaMajorVersion="1"
          SchemaMinorVersion="1"
          SchemaSubMinorVersion="0"
          MajorVersion="1"
          MinorVersion="2"
          SubMinorVersion="3"
          ToolTip="TestToolTip"
          ProductGuid="01234567-0123-0123-0123-0123456789ab"
          VersionGuid="76543210-3210-3210-3210-ba9876543210"
          xmlns="http://www.genicam.org/GenApi/Version_1_0"
          xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
          xsi:schemaLocation="http://www.genicam.org/GenApi/Version_1_0 GenApiSchema.xsd">
        </RegisterDescription>
        "#;

        let (reg_desc, ..): (RegisterDescription, _, _, _) = parse_default(xml);

        assert_eq!(reg_desc.model_name(), "TestModel");
        assert_eq!(reg_desc.vendor_name(), "TestVendor");
        assert_eq!(reg_desc.tooltip(), Some("TestToolTip"));
        assert_eq!(reg_desc.standard_name_space(), StandardNameSpace::None);
        assert_eq!(reg_desc.schema_major_version(), 1);
        assert_eq!(reg_desc.schema_minor_version(), 1);
        assert_eq!(reg_desc.schema_subminor_version(), 0);
        assert_eq!(reg_desc.major_version(), 1);
        assert_eq!(reg_desc.minor_version(), 2);
        assert_eq!(reg_desc.subminor_version(), 3);
        assert_eq!(
            reg_desc.product_guid(),
            "01234567-0123-0123-0123-0123456789ab"
        );
        assert_eq!(
            reg_desc.version_guid(),
            "76543210-3210-3210-3210-ba9876543210"
        );
    }
}
