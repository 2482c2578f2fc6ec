// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Display fallback for category keys missing from the catalog.
pub const FALLBACK_NAME: &str = "Outros";
pub const FALLBACK_COLOR: &str = "#cbd5e1";

const INCOME_COLOR: &str = "#10b981";
const EXPENSE_COLOR: &str = "#ef4444";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryKind {
    Income,
    Expense,
}

#[derive(Debug, Clone, Copy)]
pub struct CategoryInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub kind: CategoryKind,
}

const fn income(id: &'static str, name: &'static str, icon: &'static str) -> CategoryInfo {
    CategoryInfo { id, name, icon, color: INCOME_COLOR, kind: CategoryKind::Income }
}

const fn expense(id: &'static str, name: &'static str, icon: &'static str) -> CategoryInfo {
    CategoryInfo { id, name, icon, color: EXPENSE_COLOR, kind: CategoryKind::Expense }
}

pub static CATALOG: &[CategoryInfo] = &[
    // Entradas
    income("salario", "Salário", "💼"),
    income("hora_extra", "Hora extra", "⏱️"),
    income("comissao", "Comissão", "📊"),
    income("bonus", "Bônus / PLR", "🎯"),
    income("va_vr", "Vale-alimentação / refeição", "🍽️"),
    income("vt_dinheiro", "Vale-transporte", "🚌"),
    income("freelance", "Freelance", "🧑‍💻"),
    income("servicos_extras", "Serviços extras", "🔧"),
    income("vendas", "Vendas", "🛒"),
    income("apps_renda", "Apps (Uber/iFood)", "🚗"),
    income("aluguel_recebido", "Aluguel recebido", "🏠"),
    income("juros_recebidos", "Juros", "📈"),
    income("dividendos", "Dividendos", "💸"),
    income("cashback", "Cashback", "🔄"),
    income("reembolsos", "Reembolsos", "♻️"),
    income("restituicao", "Restituição imposto", "🧾"),
    income("ajuda_familiar", "Ajuda familiar", "🤝"),
    income("apostas_ganhos", "Apostas", "🎲"),
    income("premios", "Prêmios", "🏆"),
    income("outras_entradas", "Outras entradas", "➕"),
    // Saídas
    expense("aluguel", "Aluguel", "🏠"),
    expense("financiamento", "Financiamento", "🏦"),
    expense("condominio", "Condomínio", "🏢"),
    expense("iptu", "IPTU", "🏛️"),
    expense("agua", "Água", "🚿"),
    expense("luz", "Luz", "💡"),
    expense("gas", "Gás", "🔥"),
    expense("internet", "Internet", "🌐"),
    expense("telefone", "Telefone", "📞"),
    expense("mercado", "Mercado", "🛒"),
    expense("ifood", "iFood", "🍔"),
    expense("shopee", "Shopee", "🛍️"),
    expense("mercado_livre", "Mercado Livre", "📦"),
    expense("transporte", "Transporte", "🚌"),
    expense("combustivel", "Combustível", "⛽"),
    expense("estacionamento", "Estacionamento", "🅿️"),
    expense("manutencao_veiculo", "Manutenção", "🔧"),
    expense("seguro_veiculo", "Seguro veículo", "🚘"),
    expense("plano_saude", "Plano saúde", "🏥"),
    expense("farmacia", "Farmácia", "💊"),
    expense("academia", "Academia", "🏋️"),
    expense("lazer", "Lazer", "🎉"),
    expense("assinaturas", "Assinaturas", "📺"),
    expense("educacao", "Educação", "🎓"),
    expense("compras_pessoais", "Compras", "🛍️"),
    expense("vestuario", "Vestuário", "👕"),
    expense("cartao_credito", "Cartão crédito", "💳"),
    expense("parcelamentos", "Parcelamentos", "🧩"),
    expense("apostas_perdas", "Apostas", "🎰"),
    expense("impostos", "Impostos", "🧾"),
    expense("presentes", "Presentes", "🎁"),
    expense("doacoes", "Doações", "🤲"),
    expense("reserva", "Reserva", "🛡️"),
    expense("investimentos", "Investimentos", "📊"),
    expense("outras_despesas", "Outras despesas", "➖"),
];

static BY_ID: Lazy<HashMap<&'static str, &'static CategoryInfo>> =
    Lazy::new(|| CATALOG.iter().map(|c| (c.id, c)).collect());

pub fn lookup(key: &str) -> Option<&'static CategoryInfo> {
    BY_ID.get(key).copied()
}

pub fn display_name(key: &str) -> &'static str {
    lookup(key).map_or(FALLBACK_NAME, |c| c.name)
}

pub fn display_color(key: &str) -> &'static str {
    lookup(key).map_or(FALLBACK_COLOR, |c| c.color)
}

/// Lowercases and folds the accented characters that occur in catalog
/// labels, so "Salario" finds "Salário".
pub fn normalize(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).map(fold_accent).collect()
}

fn fold_accent(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        _ => c,
    }
}
