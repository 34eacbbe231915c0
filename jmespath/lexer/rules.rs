use santiago::lexer::LexerRules;

pub fn lexer_rules() -> LexerRules {
    santiago::lexer_rules!(

        "DEFAULT" | "colon" = string ":";
        "DEFAULT" | "comma" = string ",";
        "DEFAULT" | "dot" = string ".";
        "DEFAULT" | "pipe" = string "|";

        "DEFAULT" | "lparen" = string "(";
        "DEFAULT" | "rparen" = string ")";
        "DEFAULT" | "lbrace" = string "{";
        "DEFAULT" | "rbrace" = string "}";
        "DEFAULT" | "lbracket" = string "[";
        "DEFAULT" | "rbracket" = string "]";

        "DEFAULT" | "filter" = string "[?";
        "DEFAULT" | "flatten" = string "[]";

        "DEFAULT" | "star" = string "*";
        "DEFAULT" | "current" = string "@";
        "DEFAULT" | "expref" = string "&";

        // comparison operators
        "DEFAULT" | "equal" = string "==";
        "DEFAULT" | "greater_than_or_equal" = string ">=";
        "DEFAULT" | "greater_than" = string ">";
        "DEFAULT" | "less_than_or_equal" = string "<=";
        "DEFAULT" | "less_than" = string "<";
        "DEFAULT" | "not_equal" = string "!=";

        // logical operators
        "DEFAULT" | "and" = string "&&";
        "DEFAULT" | "or" = string "||";
        "DEFAULT" | "not" = string "!";

        // number
        "DEFAULT" | "number" = pattern r"-?[0-9]+";

        // identifiers
        "DEFAULT" | "quoted_string" = pattern r#""(\\([\\"/bfnrt]|u[0-9A-Fa-f]{4})|[^\\"])*""#;
        "DEFAULT" | "unquoted_string" = pattern r"[A-Za-z_][0-9A-Za-z_]*";

        // literals
        "DEFAULT" | "raw_string" = pattern r"'(\\[\\']|[^'])*'";
        "DEFAULT" | "json_value" = pattern r"`(\\`|[^`])+`";

        // Whitespace " " will be skipped
        "DEFAULT" | "WS" = pattern r"\s|\u{8}" => |lexer| lexer.skip();
    )
}
