use std::{collections::HashSet, str::from_utf8};

use conta_ledger::bin_utils::Service;

/// Full scripted session: register Ana and Bruno, deposit into Ana's
/// account, transfer part of it to Bruno, show Ana's history, leave.
const SCRIPT: &str = "\
1
Ana
11111111111
senha1
1
Bruno
22222222222
senha2
4
11111111111
senha1
50.00
2
11111111111
22222222222
30.00
senha1
3
11111111111
5
";

#[test]
fn full_session() {
    let mut output = Vec::new();
    let service = Service {
        input: SCRIPT.as_bytes(),
        output: &mut output,
    };
    service.run().unwrap();
    let transcript = from_utf8(&output).unwrap();

    assert!(transcript.contains("Cliente Ana adicionado com sucesso!"));
    assert!(transcript.contains("Cliente Bruno adicionado com sucesso!"));
    assert!(transcript.contains("Depósito de R$50.00 registrado com sucesso!"));
    assert!(transcript.contains("Transferência de R$30.00 realizada com sucesso!"));
    assert!(transcript.contains("Novo saldo da origem: R$20.00"));
    assert!(transcript.contains("Novo saldo do destino: R$30.00"));

    assert!(transcript.contains("Histórico de transações para o CPF 111.111.111-11:"));
    assert!(transcript.contains("- Depósito de R$50.00 realizado com sucesso."));
    assert!(transcript.contains("- Transferência enviada: R$30.00 para Bruno."));

    assert!(transcript.contains("Saindo do sistema. Até mais!"));

    // the summary rows come from a HashMap, so their order is randomized;
    // collect them into a hashset before asserting
    let summary: HashSet<&str> = transcript
        .lines()
        .skip_while(|line| *line != "id,cpf,nome,saldo")
        .collect();
    assert!(summary.contains("id,cpf,nome,saldo"));
    assert!(summary.contains("1,111.111.111-11,Ana,20.00"));
    assert!(summary.contains("2,222.222.222-22,Bruno,30.00"));
}

#[test]
fn errors_keep_the_session_alive() {
    // duplicate registration, wrong password, transfer to a stranger
    let script = "\
1
Ana
11111111111
senha1
1
Ana de Novo
11111111111
senha9
4
11111111111
errada
10.00
2
11111111111
22222222222
10.00
senha1
5
";
    let mut output = Vec::new();
    let service = Service {
        input: script.as_bytes(),
        output: &mut output,
    };
    service.run().unwrap();
    let transcript = from_utf8(&output).unwrap();

    assert!(transcript.contains("CPF já cadastrado. Use outro CPF."));
    assert!(transcript.contains("Senha incorreta. Operação cancelada."));
    assert!(transcript.contains("Cliente de destino não encontrado. Verifique o CPF."));
    assert!(transcript.contains("Saindo do sistema. Até mais!"));

    // Ana's balance never moved
    assert!(transcript.contains("1,111.111.111-11,Ana,0.00"));
}
