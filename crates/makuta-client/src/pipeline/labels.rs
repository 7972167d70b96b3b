/// Display label for a transaction type code. Matching is exact; codes the
/// platform has not named yet pass through verbatim.
pub fn kind_label(code: &str) -> &str {
    match code {
        "reception" => "Réception",
        "withdrawal" => "Retrait",
        "transfer" => "Transfert",
        "purchase" => "Achat",
        "commission-referral" => "Commission de parrainage",
        "commission-withdrawal" => "Commission de retrait",
        "commission-transfer" => "Commission de transfert",
        "virtual_purchase" => "Achat virtuel",
        "digital_product_sale" => "Vente de produit numérique",
        "remboursement" => "Remboursement",
        _ => code,
    }
}

/// Display label for a status code, case-insensitive like the status
/// filter itself.
pub fn status_label(code: &str) -> &str {
    match code.to_ascii_lowercase().as_str() {
        "pending" => "En attente",
        "completed" => "Complété",
        "approved" => "Approuvé",
        "failed" => "Échoué",
        "cancelled" => "Annulé",
        _ => code,
    }
}

#[cfg(test)]
mod tests {
    use super::{kind_label, status_label};

    #[test]
    fn known_kinds_get_french_labels() {
        assert_eq!(kind_label("purchase"), "Achat");
        assert_eq!(kind_label("commission-referral"), "Commission de parrainage");
        assert_eq!(kind_label("digital_product_sale"), "Vente de produit numérique");
    }

    #[test]
    fn unknown_kind_passes_through_verbatim() {
        assert_eq!(kind_label("airtime_topup"), "airtime_topup");
    }

    #[test]
    fn status_labels_match_case_insensitively() {
        assert_eq!(status_label("COMPLETED"), "Complété");
        assert_eq!(status_label("Pending"), "En attente");
        assert_eq!(status_label("archived"), "archived");
    }
}
