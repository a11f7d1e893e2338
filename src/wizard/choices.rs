// ABOUTME: Closed option sets for every choice-typed field in the registration draft
// Each option carries a stable wire value (used for serialization) and a display label

use serde::{Deserialize, Serialize};

/// A closed set of options that a choice field cycles through
pub trait Choice: Copy + PartialEq + Sized + 'static {
    /// Every option in display order
    const ALL: &'static [Self];

    /// Stable value written when the draft is serialized
    fn value(&self) -> &'static str;

    /// Human readable label
    fn label(&self) -> &'static str;

    /// Position of this option in `ALL`
    fn index(&self) -> usize {
        Self::ALL.iter().position(|option| option == self).unwrap_or(0)
    }

    fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    fn from_value(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|option| option.value() == value)
    }

    fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(Self::label).collect()
    }
}

macro_rules! choice_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident => $value:literal, $label:literal;)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $value)]
                $variant,
            )+
        }

        impl Choice for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn value(&self) -> &'static str {
                match self {
                    $(Self::$variant => $value,)+
                }
            }

            fn label(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }
    };
}

choice_enum! {
    /// Legal form of the seller's business
    BusinessType {
        SoleProprietorship => "sole-proprietorship", "Sole Proprietorship";
        Partnership => "partnership", "Partnership";
        Llc => "llc", "Limited Liability Company (LLC)";
        Corporation => "corporation", "Corporation";
        Nonprofit => "nonprofit", "Non-Profit Organization";
        Other => "other", "Other";
    }
}

choice_enum! {
    EmployeeCount {
        JustMe => "1", "Just me (1)";
        TwoToFive => "2-5", "2-5 employees";
        SixToTen => "6-10", "6-10 employees";
        ElevenToTwentyFive => "11-25", "11-25 employees";
        TwentySixToFifty => "26-50", "26-50 employees";
        FiftyOneToHundred => "51-100", "51-100 employees";
        OverHundred => "100+", "100+ employees";
    }
}

choice_enum! {
    /// Primary marketplace category for the storefront
    StoreCategory {
        Electronics => "electronics", "Electronics";
        Fashion => "fashion", "Fashion & Apparel";
        Home => "home", "Home & Garden";
        Beauty => "beauty", "Beauty & Personal Care";
        Sports => "sports", "Sports & Outdoors";
        Books => "books", "Books & Media";
        Toys => "toys", "Toys & Games";
        Automotive => "automotive", "Automotive";
        Health => "health", "Health & Wellness";
        Food => "food", "Food & Beverages";
    }
}

choice_enum! {
    SecurityQuestion {
        PetName => "pet-name", "What was the name of your first pet?";
        BirthCity => "birth-city", "In what city were you born?";
        SchoolName => "school-name", "What was the name of your elementary school?";
        MotherMaiden => "mother-maiden", "What is your mother's maiden name?";
        FirstCar => "first-car", "What was your first car?";
        BestFriend => "best-friend", "What was the name of your childhood best friend?";
    }
}

choice_enum! {
    AccountType {
        Checking => "checking", "Checking Account";
        Savings => "savings", "Savings Account";
        Business => "business", "Business Account";
    }
}

choice_enum! {
    /// How payouts reach the seller
    PaymentMethod {
        BankTransfer => "bank-transfer", "Direct Bank Transfer";
        Paypal => "paypal", "PayPal";
        Stripe => "stripe", "Stripe";
        WireTransfer => "wire-transfer", "Wire Transfer";
        Check => "check", "Paper Check";
        DigitalWallet => "digital-wallet", "Digital Wallet";
    }
}

choice_enum! {
    PaymentFrequency {
        Daily => "daily", "Daily";
        Weekly => "weekly", "Weekly";
        BiWeekly => "bi-weekly", "Bi-weekly";
        Monthly => "monthly", "Monthly";
        OnDemand => "on-demand", "On Demand";
    }
}

choice_enum! {
    Currency {
        Usd => "USD", "USD - US Dollar";
        Eur => "EUR", "EUR - Euro";
        Gbp => "GBP", "GBP - British Pound";
        Cad => "CAD", "CAD - Canadian Dollar";
        Aud => "AUD", "AUD - Australian Dollar";
        Jpy => "JPY", "JPY - Japanese Yen";
        Other => "other", "Other";
    }
}

choice_enum! {
    TaxClassification {
        Individual => "individual", "Individual/Sole Proprietor";
        SingleMemberLlc => "single-llc", "Single Member LLC";
        MultiMemberLlc => "multi-llc", "Multi Member LLC";
        CCorp => "c-corp", "C Corporation";
        SCorp => "s-corp", "S Corporation";
        Partnership => "partnership", "Partnership";
        NonProfit => "non-profit", "Non-Profit";
    }
}

choice_enum! {
    SalesTaxRegistration {
        Registered => "registered", "Registered for Sales Tax";
        NotRegistered => "not-registered", "Not Registered";
        Exempt => "exempt", "Tax Exempt";
        Pending => "pending", "Registration Pending";
    }
}

choice_enum! {
    /// Shipping pricing model
    ShippingOption {
        FlatRate => "flat-rate", "Flat Rate Shipping";
        FreeShipping => "free-shipping", "Free Shipping (Built into price)";
        WeightBased => "weight-based", "Weight-Based Pricing";
        Calculated => "calculated", "Calculated Real-time Rates";
        ZoneBased => "zone-based", "Zone-Based Pricing";
        LocalPickup => "local-pickup", "Local Pickup Only";
        Hybrid => "hybrid", "Multiple Options Available";
    }
}

choice_enum! {
    DeliveryTime {
        SameDay => "same-day", "Same Day (Local only)";
        OneToTwoDays => "1-2-days", "1-2 Business Days";
        ThreeToFiveDays => "3-5-days", "3-5 Business Days";
        FiveToSevenDays => "5-7-days", "5-7 Business Days";
        OneToTwoWeeks => "1-2-weeks", "1-2 Weeks";
        TwoToFourWeeks => "2-4-weeks", "2-4 Weeks";
        FourToSixWeeks => "4-6-weeks", "4-6 Weeks (International)";
    }
}

choice_enum! {
    PackagingType {
        Standard => "standard", "Standard Packaging";
        EcoFriendly => "eco-friendly", "Eco-Friendly Materials";
        Premium => "premium", "Premium Gift Packaging";
        Protective => "protective", "Extra Protective Packaging";
        Minimal => "minimal", "Minimal Packaging";
        Custom => "custom", "Custom Branded Packaging";
    }
}

choice_enum! {
    ReturnWindow {
        SevenDays => "7-days", "7 Days";
        FourteenDays => "14-days", "14 Days";
        ThirtyDays => "30-days", "30 Days";
        SixtyDays => "60-days", "60 Days";
        NinetyDays => "90-days", "90 Days";
        NoReturns => "no-returns", "No Returns";
    }
}

choice_enum! {
    ReturnShipping {
        BuyerPays => "buyer-pays", "Buyer Pays";
        SellerPays => "seller-pays", "Seller Pays";
        Depends => "depends", "Case by Case";
    }
}

choice_enum! {
    RefundMethod {
        OriginalPayment => "original-payment", "Original Payment Method";
        StoreCredit => "store-credit", "Store Credit Only";
        ExchangeOnly => "exchange-only", "Exchange Only";
    }
}

choice_enum! {
    /// Customer service availability promised to buyers
    ServiceHours {
        AroundTheClock => "24-7", "24/7 Support";
        BusinessHours => "business-hours", "Business Hours (9 AM - 5 PM)";
        ExtendedHours => "extended-hours", "Extended Hours (8 AM - 8 PM)";
        WeekdaysOnly => "weekdays-only", "Weekdays Only";
        LimitedHours => "limited-hours", "Limited Hours";
        EmailOnly => "email-only", "Email Support Only";
    }
}

choice_enum! {
    ResponseTime {
        Immediate => "immediate", "Within 1 Hour";
        SameDay => "same-day", "Same Day";
        TwentyFourHours => "24-hours", "Within 24 Hours";
        FortyEightHours => "48-hours", "Within 48 Hours";
        ThreeDays => "3-days", "Within 3 Business Days";
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for option in StoreCategory::ALL {
            assert_eq!(StoreCategory::from_index(option.index()), Some(*option));
        }
        assert_eq!(StoreCategory::from_index(StoreCategory::ALL.len()), None);
    }

    #[test]
    fn test_serde_uses_wire_value() {
        let json = serde_json::to_string(&EmployeeCount::OverHundred).unwrap();
        assert_eq!(json, "\"100+\"");

        let parsed: ServiceHours = serde_json::from_str("\"24-7\"").unwrap();
        assert_eq!(parsed, ServiceHours::AroundTheClock);
    }

    #[test]
    fn test_from_value_matches_serde_rename() {
        for option in TaxClassification::ALL {
            let json = serde_json::to_string(option).unwrap();
            assert_eq!(json, format!("\"{}\"", option.value()));
            assert_eq!(TaxClassification::from_value(option.value()), Some(*option));
        }
        assert_eq!(Currency::from_value("XYZ"), None);
    }

    #[test]
    fn test_labels_follow_display_order() {
        let labels = AccountType::labels();
        assert_eq!(labels, vec!["Checking Account", "Savings Account", "Business Account"]);
    }
}
