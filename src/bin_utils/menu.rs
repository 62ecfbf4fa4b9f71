/// Menu text shown before every prompt, option numbering kept from the
/// original terminal program.
pub const MENU: &str = "Menu:
1. Adicionar cliente
2. Realizar transferência
3. Exibir histórico de transações
4. Adicionar dinheiro à conta
5. Sair";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Register,
    Transfer,
    History,
    Deposit,
    Exit,
}

impl MenuOption {
    pub fn parse(choice: &str) -> Option<Self> {
        match choice {
            "1" => Some(Self::Register),
            "2" => Some(Self::Transfer),
            "3" => Some(Self::History),
            "4" => Some(Self::Deposit),
            "5" => Some(Self::Exit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_options() {
        assert_eq!(MenuOption::parse("1"), Some(MenuOption::Register));
        assert_eq!(MenuOption::parse("2"), Some(MenuOption::Transfer));
        assert_eq!(MenuOption::parse("3"), Some(MenuOption::History));
        assert_eq!(MenuOption::parse("4"), Some(MenuOption::Deposit));
        assert_eq!(MenuOption::parse("5"), Some(MenuOption::Exit));
    }

    #[test]
    fn rejects_anything_else() {
        assert_eq!(MenuOption::parse(""), None);
        assert_eq!(MenuOption::parse("6"), None);
        assert_eq!(MenuOption::parse("sair"), None);
    }
}
