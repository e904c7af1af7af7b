//! Content authored by the radiotherapy service. Display order is the
//! authored order and must be preserved as written here.

use super::{Category, Entry};

pub(super) const CATEGORIES: &[Category] = &[
    Category {
        name: "Inicio del tratamiento",
        entries: &[
            Entry {
                question: "¿Cuándo empezaré el tratamiento de radioterapia?",
                answer: "Tras la primera visita, se realiza un estudio de planificación (TAC y cálculos \
                         dosimétricos). Cuando todo está preparado, te llamaremos para darte la fecha de inicio.",
            },
            Entry {
                question: "¿Por qué tarda en empezar el tratamiento después de la primera consulta?",
                answer: "Porque se necesita tiempo para preparar tu tratamiento de forma precisa y segura: \
                         planificación, cálculos y comprobaciones de calidad.",
            },
        ],
    },
    Category {
        name: "Durante el tratamiento",
        entries: &[
            Entry {
                question: "¿Duele recibir radioterapia?",
                answer: "No. La radioterapia es un tratamiento indoloro. No notarás nada mientras la máquina \
                         está funcionando.",
            },
            Entry {
                question: "¿Cuánto dura cada sesión de radioterapia?",
                answer: "En total estarás en la sala entre 10 y 30 minutos. La parte de irradiación dura solo \
                         unos pocos minutos.",
            },
            Entry {
                question: "¿Puedo moverme durante la sesión?",
                answer: "Es importante que estés lo más quieto/a posible durante la sesión para que el \
                         tratamiento sea preciso. El equipo te ayudará a colocarte de forma cómoda antes de empezar.",
            },
            Entry {
                question: "¿Qué ropa debo usar para venir a la radioterapia?",
                answer: "Es mejor llevar ropa cómoda, holgada y fácil de quitar si hace falta. La ropa que esté \
                         en contacto con la zona irradiada se recomienda que sea de algodón y sin costuras o \
                         elásticos que aprieten.",
            },
        ],
    },
    Category {
        name: "Efectos secundarios y cuidados",
        entries: &[
            Entry {
                question: "¿Voy a perder el pelo con la radioterapia?",
                answer: "Solo se pierde el pelo en la zona donde se aplica la radioterapia. Si no se irradia la \
                         cabeza, el pelo del cuero cabelludo no se pierde.",
            },
            Entry {
                question: "¿Se me caerá el pelo del cuerpo o de la barba?",
                answer: "Puede caerse el pelo de la zona del cuerpo que reciba radioterapia (por ejemplo, barba, \
                         axila o pubis) si está incluida en el campo de tratamiento.",
            },
            Entry {
                question: "¿Qué cuidados de piel debo tener durante la radioterapia?",
                answer: "Mantén la piel limpia y seca, utiliza los productos recomendados por tu equipo y evita \
                         el sol directo en la zona tratada. No apliques cremas ni desodorantes en la zona sin \
                         comentarlo antes con el personal sanitario.",
            },
            Entry {
                question: "¿Puedo ducharme con normalidad durante el tratamiento?",
                answer: "Sí, puedes ducharte con agua templada y jabón suave. Evita frotar fuerte la zona \
                         tratada y sécala con toques suaves.",
            },
        ],
    },
    Category {
        name: "Vida diaria y transporte",
        entries: &[
            Entry {
                question: "¿Podré seguir trabajando durante el tratamiento?",
                answer: "Muchas personas pueden seguir trabajando, sobre todo al inicio del tratamiento. Depende \
                         de tu tipo de trabajo, de cómo te encuentres y del tipo de radioterapia. Coméntalo con \
                         tu oncólogo/a para valorar tu caso.",
            },
            Entry {
                question: "¿Voy a ser radiactivo/a después del tratamiento?",
                answer: "No. La radioterapia externa no te hace radiactivo/a. Puedes estar con tu familia, niños \
                         y embarazadas con total tranquilidad.",
            },
            Entry {
                question: "¿Puedo conducir durante el tratamiento?",
                answer: "En general, sí, siempre que te encuentres bien y no tengas mareos ni mucha fatiga. Si \
                         notas mucho cansancio, es mejor que otra persona te acompañe.",
            },
            Entry {
                question: "¿Qué pasa si un día llego tarde o no puedo venir a la sesión?",
                answer: "Si un día no puedes venir, avisa al servicio lo antes posible. Se intentará recolocar \
                         la sesión en otro momento para que el tratamiento se complete correctamente.",
            },
        ],
    },
    Category {
        name: "Sexualidad y fertilidad",
        entries: &[
            Entry {
                question: "¿Puedo mantener relaciones sexuales durante el tratamiento?",
                answer: "En la mayoría de los casos sí. Si la radioterapia es en la zona pélvica, puede haber \
                         molestias o cambios en la lubricación o en la sensibilidad. Coméntalo con tu equipo si \
                         tienes dudas o molestias.",
            },
            Entry {
                question: "¿La radioterapia afecta a la fertilidad?",
                answer: "La radioterapia en la zona pélvica puede afectar a la fertilidad. Si te preocupa este \
                         tema, es importante hablarlo con el oncólogo/a antes de empezar el tratamiento para \
                         valorar opciones de preservación.",
            },
            Entry {
                question: "¿Puedo tener relaciones si estoy muy cansado/a o con menos deseo sexual?",
                answer: "Es frecuente que durante el tratamiento baje el deseo sexual por cansancio, estrés o \
                         cambios físicos. Es importante hablarlo con la pareja con naturalidad y, si lo \
                         necesitas, comentarlo con el equipo médico.",
            },
        ],
    },
    Category {
        name: "Otros aspectos prácticos",
        entries: &[
            Entry {
                question: "¿Puedo comer con normalidad durante la radioterapia?",
                answer: "Depende de la zona que se trate. En muchos casos puedes seguir una dieta normal. Si la \
                         radioterapia afecta al aparato digestivo, es posible que te recomienden una dieta especial.",
            },
            Entry {
                question: "¿Puedo hacer ejercicio físico durante el tratamiento?",
                answer: "Sí, siempre que sea ejercicio suave o moderado y te encuentres con fuerzas. Caminar \
                         cada día suele ser muy recomendable.",
            },
            Entry {
                question: "¿Con quién puedo hablar si tengo más dudas?",
                answer: "Puedes preguntar siempre a tu oncólogo/a radioterápico/a, a la enfermera del servicio o \
                         al personal técnico. Están para ayudarte.",
            },
        ],
    },
];
