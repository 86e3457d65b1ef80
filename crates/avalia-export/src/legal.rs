//! Legal references quoted on the first page of every evaluation.
//! Static text; nothing here depends on the record.

pub struct Quotation {
    /// Nesting depth, starting at 1.
    pub level: u8,
    pub text: &'static str,
}

pub struct LegalReference {
    pub lead: &'static str,
    pub quotations: &'static [Quotation],
}

pub static REFERENCES: [LegalReference; 3] = [
    LegalReference {
        lead: "A Lei nº 13.146, de 6 de julho de 2015 (Lei Brasileira de Inclusão da Pessoa \
               com Deficiência), estabelece:",
        quotations: &[
            Quotation {
                level: 1,
                text: "Art. 2º Considera-se pessoa com deficiência aquela que tem impedimento \
                       de longo prazo de natureza física, mental, intelectual ou sensorial, o \
                       qual, em interação com uma ou mais barreiras, pode obstruir sua \
                       participação plena e efetiva na sociedade em igualdade de condições com \
                       as demais pessoas.",
            },
            Quotation {
                level: 1,
                text: "Art. 3º Para fins de aplicação desta Lei, consideram-se:",
            },
            Quotation {
                level: 2,
                text: "XIII - profissional de apoio escolar: pessoa que exerce atividades de \
                       alimentação, higiene e locomoção do estudante com deficiência e atua em \
                       todas as atividades escolares nas quais se fizer necessária, em todos os \
                       níveis e modalidades de ensino, em instituições públicas e privadas, \
                       excluídas as técnicas ou os procedimentos identificados com profissões \
                       legalmente estabelecidas;",
            },
        ],
    },
    LegalReference {
        lead: "A Resolução CNE/CEB nº 4, de 2 de outubro de 2009, que institui as Diretrizes \
               Operacionais para o Atendimento Educacional Especializado na Educação Básica, \
               define:",
        quotations: &[
            Quotation {
                level: 1,
                text: "Art. 4º Para fins destas Diretrizes, considera-se público-alvo do AEE:",
            },
            Quotation {
                level: 2,
                text: "I - Alunos com deficiência: aqueles que têm impedimentos de longo prazo \
                       de natureza física, intelectual, mental ou sensorial.",
            },
            Quotation {
                level: 2,
                text: "II - Alunos com transtornos globais do desenvolvimento: aqueles que \
                       apresentam um quadro de alterações no desenvolvimento neuropsicomotor, \
                       comprometimento nas relações sociais, na comunicação ou estereotipias \
                       motoras.",
            },
            Quotation {
                level: 2,
                text: "III - Alunos com altas habilidades/superdotação: aqueles que apresentam \
                       um potencial elevado e grande envolvimento com as áreas do conhecimento \
                       humano, isoladas ou combinadas: intelectual, liderança, psicomotora, \
                       artes e criatividade.",
            },
        ],
    },
    LegalReference {
        lead: "A Nota Técnica nº 04/2014/MEC/SECADI/DPEE orienta quanto aos documentos \
               comprobatórios de estudantes público-alvo da educação especial:",
        quotations: &[
            Quotation {
                level: 1,
                text: "Não se pode considerar imprescindível a apresentação de laudo médico \
                       (diagnóstico clínico) por parte do aluno com deficiência, transtornos \
                       globais do desenvolvimento ou altas habilidades/superdotação, uma vez que \
                       o AEE caracteriza-se por atendimento pedagógico e não clínico.",
            },
            Quotation {
                level: 2,
                text: "Durante o estudo de caso, primeira etapa da elaboração do Plano de AEE, \
                       se for necessário, o professor do AEE poderá articular-se com \
                       profissionais da área da saúde, tornando-se o laudo médico, neste caso, \
                       um documento anexo ao Plano de AEE.",
            },
        ],
    },
];
