// ABOUTME: Shipping and returns panel, including the region multi-select

use super::{FieldSpec, FieldValue};
use crate::wizard::choices::{
    DeliveryTime, PackagingType, RefundMethod, ResponseTime, ReturnShipping, ReturnWindow,
    ServiceHours, ShippingOption,
};
use crate::wizard::draft::ShippingPolicies;
use crate::wizard::patch::ShippingPoliciesPatch;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShippingField {
    ShippingRegions,
    ShippingOptions,
    FreeShippingThreshold,
    DeliveryTime,
    PackagingType,
    InternationalShipping,
    ReturnPolicy,
    ReturnWindow,
    ReturnShipping,
    RefundMethod,
    CustomerServiceHours,
    ResponseTime,
}

impl ShippingField {
    pub const ALL: &'static [Self] = &[
        Self::ShippingRegions,
        Self::ShippingOptions,
        Self::FreeShippingThreshold,
        Self::DeliveryTime,
        Self::PackagingType,
        Self::InternationalShipping,
        Self::ReturnPolicy,
        Self::ReturnWindow,
        Self::ReturnShipping,
        Self::RefundMethod,
        Self::CustomerServiceHours,
        Self::ResponseTime,
    ];

    pub fn spec(&self) -> FieldSpec {
        match self {
            Self::ShippingRegions => FieldSpec::regions("Shipping Regions Supported").required(),
            Self::ShippingOptions => FieldSpec::choice::<ShippingOption>(
                "Primary Shipping Method",
                "Select shipping pricing model",
            )
            .required(),
            Self::FreeShippingThreshold => {
                FieldSpec::text("Free Shipping Threshold", "e.g., $50, $100")
            }
            Self::DeliveryTime => FieldSpec::choice::<DeliveryTime>(
                "Standard Delivery Time",
                "Select delivery timeframe",
            )
            .required(),
            Self::PackagingType => {
                FieldSpec::choice::<PackagingType>("Packaging Type", "Select packaging approach")
                    .required()
            }
            Self::InternationalShipping => FieldSpec::toggle("Offer International Shipping"),
            Self::ReturnPolicy => FieldSpec::text(
                "Detailed Return Policy",
                "Timeframe, condition requirements, refund process and exceptions",
            )
            .required(),
            Self::ReturnWindow => {
                FieldSpec::choice::<ReturnWindow>("Return Window", "Select timeframe")
            }
            Self::ReturnShipping => {
                FieldSpec::choice::<ReturnShipping>("Return Shipping", "Who pays?")
            }
            Self::RefundMethod => FieldSpec::choice::<RefundMethod>("Refund Method", "Select method"),
            Self::CustomerServiceHours => FieldSpec::choice::<ServiceHours>(
                "Customer Service Hours",
                "Select service hours",
            )
            .required(),
            Self::ResponseTime => FieldSpec::choice::<ResponseTime>(
                "Response Time Commitment",
                "Select response time",
            ),
        }
    }

    pub fn read(&self, section: &ShippingPolicies) -> FieldValue {
        match self {
            Self::ShippingRegions => FieldValue::Regions(section.shipping_regions.clone()),
            Self::ShippingOptions => FieldValue::choice(section.shipping_options),
            Self::FreeShippingThreshold => {
                FieldValue::Text(section.free_shipping_threshold.clone())
            }
            Self::DeliveryTime => FieldValue::choice(section.delivery_time),
            Self::PackagingType => FieldValue::choice(section.packaging_type),
            Self::InternationalShipping => FieldValue::Flag(section.international_shipping),
            Self::ReturnPolicy => FieldValue::Text(section.return_policy.clone()),
            Self::ReturnWindow => FieldValue::choice(section.return_window),
            Self::ReturnShipping => FieldValue::choice(section.return_shipping),
            Self::RefundMethod => FieldValue::choice(section.refund_method),
            Self::CustomerServiceHours => FieldValue::choice(section.customer_service_hours),
            Self::ResponseTime => FieldValue::choice(section.response_time),
        }
    }

    pub fn patch(&self, value: FieldValue) -> Option<ShippingPoliciesPatch> {
        let mut patch = ShippingPoliciesPatch::default();
        match self {
            Self::ShippingRegions => patch.shipping_regions = Some(value.into_regions()?),
            Self::ShippingOptions => patch.shipping_options = Some(value.into_choice()?),
            Self::FreeShippingThreshold => {
                patch.free_shipping_threshold = Some(value.into_text()?);
            }
            Self::DeliveryTime => patch.delivery_time = Some(value.into_choice()?),
            Self::PackagingType => patch.packaging_type = Some(value.into_choice()?),
            Self::InternationalShipping => {
                patch.international_shipping = Some(value.into_flag()?);
            }
            Self::ReturnPolicy => patch.return_policy = Some(value.into_text()?),
            Self::ReturnWindow => patch.return_window = Some(value.into_choice()?),
            Self::ReturnShipping => patch.return_shipping = Some(value.into_choice()?),
            Self::RefundMethod => patch.refund_method = Some(value.into_choice()?),
            Self::CustomerServiceHours => {
                patch.customer_service_hours = Some(value.into_choice()?);
            }
            Self::ResponseTime => patch.response_time = Some(value.into_choice()?),
        }
        Some(patch)
    }
}
