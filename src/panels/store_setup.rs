// ABOUTME: Store branding panel: name, category, description, artwork and social links

use super::{FieldSpec, FieldValue};
use crate::collaborators::FileSlot;
use crate::wizard::choices::StoreCategory;
use crate::wizard::draft::{SocialMediaLinks, StoreSetup};
use crate::wizard::patch::StoreSetupPatch;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreSetupField {
    StoreName,
    StoreCategory,
    StoreDescription,
    StoreLogo,
    StoreBanner,
    Facebook,
    Instagram,
    Twitter,
}

impl StoreSetupField {
    pub const ALL: &'static [Self] = &[
        Self::StoreName,
        Self::StoreCategory,
        Self::StoreDescription,
        Self::StoreLogo,
        Self::StoreBanner,
        Self::Facebook,
        Self::Instagram,
        Self::Twitter,
    ];

    pub fn spec(&self) -> FieldSpec {
        match self {
            Self::StoreName => FieldSpec::text("Store Name", "Choose a unique store name").required(),
            Self::StoreCategory => {
                FieldSpec::choice::<StoreCategory>("Store Category", "Select your primary category")
                    .required()
            }
            Self::StoreDescription => FieldSpec::text(
                "Store Description",
                "Describe what you sell and what makes your store unique",
            )
            .required(),
            Self::StoreLogo => FieldSpec::file("Store Logo", FileSlot::StoreLogo).required(),
            Self::StoreBanner => FieldSpec::file("Store Banner (Optional)", FileSlot::StoreBanner),
            Self::Facebook => FieldSpec::text("Facebook", "https://facebook.com/yourstore"),
            Self::Instagram => FieldSpec::text("Instagram", "@yourstore"),
            Self::Twitter => FieldSpec::text("Twitter", "@yourstore"),
        }
    }

    pub fn read(&self, section: &StoreSetup) -> FieldValue {
        let links = &section.social_media_links;
        match self {
            Self::StoreName => FieldValue::Text(section.store_name.clone()),
            Self::StoreCategory => FieldValue::choice(section.store_category),
            Self::StoreDescription => FieldValue::Text(section.store_description.clone()),
            Self::StoreLogo => FieldValue::File(section.store_logo.clone()),
            Self::StoreBanner => FieldValue::File(section.store_banner.clone()),
            Self::Facebook => FieldValue::Text(links.facebook.clone()),
            Self::Instagram => FieldValue::Text(links.instagram.clone()),
            Self::Twitter => FieldValue::Text(links.twitter.clone()),
        }
    }

    /// Social links replace the nested record, so the current one is needed to keep its siblings
    pub fn patch(&self, section: &StoreSetup, value: FieldValue) -> Option<StoreSetupPatch> {
        let mut patch = StoreSetupPatch::default();
        match self {
            Self::StoreName => patch.store_name = Some(value.into_text()?),
            Self::StoreCategory => patch.store_category = Some(value.into_choice()?),
            Self::StoreDescription => patch.store_description = Some(value.into_text()?),
            Self::StoreLogo => patch.store_logo = Some(value.into_file()?),
            Self::StoreBanner => patch.store_banner = Some(value.into_file()?),
            Self::Facebook | Self::Instagram | Self::Twitter => {
                let text = value.into_text()?;
                let mut links: SocialMediaLinks = section.social_media_links.clone();
                match self {
                    Self::Facebook => links.facebook = text,
                    Self::Instagram => links.instagram = text,
                    _ => links.twitter = text,
                }
                patch.social_media_links = Some(links);
            }
        }
        Some(patch)
    }
}
