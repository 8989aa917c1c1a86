// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2026 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! Commercial document kinds and the settlement clause they embed.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::types::Money;

/// The kind of commercial document a total is printed on.
///
/// The `Display`/`FromStr` forms are the wire codes used by document
/// records (`INVOICE`, `DELIVERY_NOTE`, ...).
#[derive(
    Clone,
    Copy,
    Debug,
    Display,
    EnumIter,
    EnumString,
    Eq,
    Hash,
    PartialEq,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentKind {
    /// Facture.
    Invoice,
    /// Devis.
    Quote,
    /// Bon de livraison.
    DeliveryNote,
    /// Avoir.
    CreditNote,
    /// Bon de commande.
    PurchaseOrder,
}

impl DocumentKind {
    /// The French label as printed on the document.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Invoice => "facture",
            Self::Quote => "devis",
            Self::DeliveryNote => "bon de livraison",
            Self::CreditNote => "avoir",
            Self::PurchaseOrder => "bon de commande",
        }
    }

    /// Whether the French label is grammatically feminine ("la facture").
    const fn is_feminine(&self) -> bool {
        matches!(self, Self::Invoice)
    }
}

/// Renders the legal settlement clause printed under a document total,
/// with past-participle and article agreement on the document label:
/// "Arrêté le présent devis à la somme de : ..." /
/// "Arrêtée la présente facture à la somme de : ...".
#[must_use]
pub fn settlement_clause(kind: DocumentKind, total: &Money) -> String {
    let words = total.to_words();
    if kind.is_feminine() {
        format!("Arrêtée la présente {} à la somme de : {words}", kind.label())
    } else {
        format!("Arrêté le présent {} à la somme de : {words}", kind.label())
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rstest::rstest;
    use strum::IntoEnumIterator;

    use super::*;
    use crate::types::stubs::*;

    #[rstest]
    #[case(DocumentKind::Invoice, "INVOICE", "facture")]
    #[case(DocumentKind::Quote, "QUOTE", "devis")]
    #[case(DocumentKind::DeliveryNote, "DELIVERY_NOTE", "bon de livraison")]
    #[case(DocumentKind::CreditNote, "CREDIT_NOTE", "avoir")]
    #[case(DocumentKind::PurchaseOrder, "PURCHASE_ORDER", "bon de commande")]
    fn test_kind_codes_and_labels(
        #[case] kind: DocumentKind,
        #[case] code: &str,
        #[case] label: &str,
    ) {
        assert_eq!(kind.to_string(), code);
        assert_eq!(kind.label(), label);
    }

    #[rstest]
    fn test_wire_code_round_trip() {
        for kind in DocumentKind::iter() {
            let code = kind.to_string();
            assert_eq!(DocumentKind::from_str(&code).unwrap(), kind);

            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{code}\""));
            let deserialized: DocumentKind = serde_json::from_str(&json).unwrap();
            assert_eq!(deserialized, kind);
        }
    }

    #[rstest]
    fn test_settlement_clause_masculine(money_ttc: Money) {
        assert_eq!(
            settlement_clause(DocumentKind::Quote, &money_ttc),
            "Arrêté le présent devis à la somme de : \
             Mille deux cent trente-quatre dirhams et cinquante-six centimes"
        );
    }

    #[rstest]
    fn test_settlement_clause_feminine(money_ttc: Money) {
        assert_eq!(
            settlement_clause(DocumentKind::Invoice, &money_ttc),
            "Arrêtée la présente facture à la somme de : \
             Mille deux cent trente-quatre dirhams et cinquante-six centimes"
        );
    }

    #[rstest]
    fn test_settlement_clause_every_kind_embeds_words(money_ttc: Money) {
        for kind in DocumentKind::iter() {
            let clause = settlement_clause(kind, &money_ttc);
            assert!(clause.contains(kind.label()));
            assert!(clause.ends_with(&money_ttc.to_words()));
        }
    }
}
