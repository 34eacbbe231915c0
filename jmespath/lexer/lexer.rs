use std::rc::Rc;

use santiago::lexer::Lexeme;

use crate::errors::Error as LexerError;
use crate::errors::Position;

use crate::errors::error_builder::ErrorBuilder;
use crate::errors::error_builder::SyntaxErrorBuilder;
use crate::errors::syntax::SyntaxErrorBuilderFactory;
use crate::lexer::rules::lexer_rules;

pub(crate) fn tokenize(input: &str) -> Result<Vec<Rc<Lexeme>>, LexerError> {
    let lexer_rules = lexer_rules();
    let result = santiago::lexer::lex(&lexer_rules, &input);
    return match result {
        Ok(tokens) => Ok(tokens),
        Err(error) => {
            let byte = input.as_bytes()[error.byte_index];
            let extract = String::from_utf8(input.as_bytes()[error.byte_index..].to_vec()).unwrap();
            let category = match byte {
                34 => "quoted-string",
                39 => "raw-string",
                96 => "JSON literal",
                _ => "expression",
            };
            let reason = format!("invalid {} near ->{}<-", category, extract);
            Err(LexerError::get_syntax_error_builder()
                .at(Position::new(error.position.line, error.position.column))
                .for_reason(&reason)
                .build())
        }
    };
}
