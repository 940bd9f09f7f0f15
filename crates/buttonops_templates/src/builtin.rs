//! Builtin project templates.
//!
//! One template per [`ProjectType`](crate::registry::ProjectType), each an
//! ordered list of output files. Bodies use `{{identifier}}` placeholders
//! resolved by the renderer; identifiers without a binding pass through
//! verbatim, which is how the Helm chart directives below survive rendering.

use crate::registry::{Template, TemplateFile};

/// REST API template: Express + TypeScript service with the full
/// container/Kubernetes/Helm deployment complement.
pub fn rest_api() -> Template {
    Template {
        name: "REST API",
        description: "Node.js REST API with Express and TypeScript",
        files: vec![
            TemplateFile {
                path: "package.json",
                body: REST_API_PACKAGE_JSON,
            },
            TemplateFile {
                path: "src/app.ts",
                body: REST_API_APP,
            },
            TemplateFile {
                path: "src/routes/health.ts",
                body: HEALTH_ROUTE,
            },
            TemplateFile {
                path: "src/middleware/cors.ts",
                body: CORS_MIDDLEWARE,
            },
            TemplateFile {
                path: "Dockerfile",
                body: NODE_DOCKERFILE,
            },
            TemplateFile {
                path: "docker-compose.yml",
                body: DOCKER_COMPOSE,
            },
            TemplateFile {
                path: "deploy/k8s/deployment.yaml",
                body: K8S_DEPLOYMENT,
            },
            TemplateFile {
                path: "deploy/k8s/service.yaml",
                body: K8S_SERVICE,
            },
            TemplateFile {
                path: "deploy/k8s/ingress.yaml",
                body: K8S_INGRESS,
            },
            TemplateFile {
                path: "deploy/helm/Chart.yaml",
                body: HELM_CHART,
            },
            TemplateFile {
                path: "deploy/helm/values.yaml",
                body: HELM_VALUES,
            },
            TemplateFile {
                path: "deploy/helm/values-dev.yaml",
                body: HELM_VALUES_DEV,
            },
            TemplateFile {
                path: "deploy/helm/values-qa.yaml",
                body: HELM_VALUES_QA,
            },
            TemplateFile {
                path: "deploy/helm/values-prod.yaml",
                body: HELM_VALUES_PROD,
            },
            TemplateFile {
                path: "deploy/helm/templates/deployment.yaml",
                body: HELM_DEPLOYMENT_TEMPLATE,
            },
            TemplateFile {
                path: "deploy/helm/templates/service.yaml",
                body: HELM_SERVICE_TEMPLATE,
            },
            TemplateFile {
                path: "deploy/helm/templates/ingress.yaml",
                body: HELM_INGRESS_TEMPLATE,
            },
            TemplateFile {
                path: "README.md",
                body: PROJECT_README,
            },
            TemplateFile {
                path: ".gitignore",
                body: GITIGNORE,
            },
            TemplateFile {
                path: ".dockerignore",
                body: DOCKERIGNORE,
            },
        ],
    }
}

/// GraphQL API template: Apollo Server with the same deployment complement.
pub fn graphql() -> Template {
    Template {
        name: "GraphQL API",
        description: "Node.js GraphQL API with Apollo Server",
        files: vec![
            TemplateFile {
                path: "package.json",
                body: GRAPHQL_PACKAGE_JSON,
            },
            TemplateFile {
                path: "src/app.ts",
                body: GRAPHQL_APP,
            },
            TemplateFile {
                path: "src/schema/index.ts",
                body: GRAPHQL_SCHEMA,
            },
            TemplateFile {
                path: "src/resolvers/index.ts",
                body: GRAPHQL_RESOLVERS,
            },
            TemplateFile {
                path: "Dockerfile",
                body: NODE_DOCKERFILE,
            },
            TemplateFile {
                path: "docker-compose.yml",
                body: DOCKER_COMPOSE,
            },
            TemplateFile {
                path: "deploy/k8s/deployment.yaml",
                body: K8S_DEPLOYMENT,
            },
            TemplateFile {
                path: "deploy/k8s/service.yaml",
                body: K8S_SERVICE,
            },
            TemplateFile {
                path: "deploy/k8s/ingress.yaml",
                body: K8S_INGRESS,
            },
            TemplateFile {
                path: "deploy/helm/Chart.yaml",
                body: HELM_CHART,
            },
            TemplateFile {
                path: "deploy/helm/values.yaml",
                body: HELM_VALUES,
            },
            TemplateFile {
                path: "deploy/helm/values-dev.yaml",
                body: HELM_VALUES_DEV,
            },
            TemplateFile {
                path: "deploy/helm/values-qa.yaml",
                body: HELM_VALUES_QA,
            },
            TemplateFile {
                path: "deploy/helm/values-prod.yaml",
                body: HELM_VALUES_PROD,
            },
            TemplateFile {
                path: "README.md",
                body: PROJECT_README,
            },
            TemplateFile {
                path: ".gitignore",
                body: GITIGNORE,
            },
        ],
    }
}

/// Background worker template: Bull queue consumer.
pub fn worker() -> Template {
    Template {
        name: "Background Worker",
        description: "Node.js background worker with Bull Queue",
        files: vec![
            TemplateFile {
                path: "package.json",
                body: WORKER_PACKAGE_JSON,
            },
            TemplateFile {
                path: "src/worker.ts",
                body: WORKER_APP,
            },
            TemplateFile {
                path: "src/jobs/email.ts",
                body: EMAIL_JOB,
            },
            TemplateFile {
                path: "Dockerfile",
                body: NODE_DOCKERFILE,
            },
            TemplateFile {
                path: "docker-compose.yml",
                body: DOCKER_COMPOSE,
            },
            TemplateFile {
                path: "deploy/k8s/deployment.yaml",
                body: K8S_DEPLOYMENT,
            },
            TemplateFile {
                path: "deploy/helm/Chart.yaml",
                body: HELM_CHART,
            },
            TemplateFile {
                path: "deploy/helm/values.yaml",
                body: HELM_VALUES,
            },
            TemplateFile {
                path: "deploy/helm/values-dev.yaml",
                body: HELM_VALUES_DEV,
            },
            TemplateFile {
                path: "deploy/helm/values-qa.yaml",
                body: HELM_VALUES_QA,
            },
            TemplateFile {
                path: "deploy/helm/values-prod.yaml",
                body: HELM_VALUES_PROD,
            },
            TemplateFile {
                path: "README.md",
                body: PROJECT_README,
            },
            TemplateFile {
                path: ".gitignore",
                body: GITIGNORE,
            },
        ],
    }
}

/// Frontend template: static React app served by nginx.
pub fn frontend() -> Template {
    Template {
        name: "Frontend",
        description: "React single-page app served by nginx",
        files: vec![
            TemplateFile {
                path: "package.json",
                body: FRONTEND_PACKAGE_JSON,
            },
            TemplateFile {
                path: "index.html",
                body: FRONTEND_INDEX_HTML,
            },
            TemplateFile {
                path: "src/main.tsx",
                body: FRONTEND_MAIN,
            },
            TemplateFile {
                path: "src/App.tsx",
                body: FRONTEND_APP,
            },
            TemplateFile {
                path: "nginx.conf",
                body: FRONTEND_NGINX_CONF,
            },
            TemplateFile {
                path: "Dockerfile",
                body: FRONTEND_DOCKERFILE,
            },
            TemplateFile {
                path: "docker-compose.yml",
                body: FRONTEND_DOCKER_COMPOSE,
            },
            TemplateFile {
                path: "deploy/k8s/deployment.yaml",
                body: K8S_DEPLOYMENT,
            },
            TemplateFile {
                path: "deploy/k8s/service.yaml",
                body: K8S_SERVICE,
            },
            TemplateFile {
                path: "deploy/k8s/ingress.yaml",
                body: K8S_INGRESS,
            },
            TemplateFile {
                path: "deploy/helm/Chart.yaml",
                body: HELM_CHART,
            },
            TemplateFile {
                path: "deploy/helm/values.yaml",
                body: HELM_VALUES,
            },
            TemplateFile {
                path: "deploy/helm/values-dev.yaml",
                body: HELM_VALUES_DEV,
            },
            TemplateFile {
                path: "deploy/helm/values-qa.yaml",
                body: HELM_VALUES_QA,
            },
            TemplateFile {
                path: "deploy/helm/values-prod.yaml",
                body: HELM_VALUES_PROD,
            },
            TemplateFile {
                path: "README.md",
                body: PROJECT_README,
            },
            TemplateFile {
                path: ".gitignore",
                body: GITIGNORE,
            },
            TemplateFile {
                path: ".dockerignore",
                body: DOCKERIGNORE,
            },
        ],
    }
}

// ── REST API ──────────────────────────────────────────────────────────────

const REST_API_PACKAGE_JSON: &str = r#"{
  "name": "{{projectName}}",
  "version": "1.0.0",
  "description": "{{projectName}} REST API",
  "main": "dist/app.js",
  "scripts": {
    "start": "node dist/app.js",
    "dev": "ts-node-dev --respawn --transpile-only src/app.ts",
    "build": "tsc",
    "test": "jest",
    "test:watch": "jest --watch",
    "lint": "eslint src/**/*.ts",
    "lint:fix": "eslint src/**/*.ts --fix"
  },
  "dependencies": {
    "express": "^4.18.2",
    "cors": "^2.8.5",
    "helmet": "^7.1.0",
    "redis": "^4.6.10",
    "winston": "^3.11.0",
    "dotenv": "^16.3.1"
  },
  "devDependencies": {
    "@types/express": "^4.17.21",
    "@types/cors": "^2.8.17",
    "@types/node": "^20.8.0",
    "typescript": "^5.2.2",
    "ts-node-dev": "^2.0.0",
    "jest": "^29.7.0",
    "@types/jest": "^29.5.8",
    "eslint": "^8.50.0",
    "@typescript-eslint/eslint-plugin": "^6.7.4",
    "@typescript-eslint/parser": "^6.7.4"
  }
}"#;

const REST_API_APP: &str = r#"import express from 'express';
import cors from 'cors';
import helmet from 'helmet';
import { healthRouter } from './routes/health';

const app = express();
const port = process.env.PORT || 3000;

// Middleware
app.use(helmet());
app.use(cors());
app.use(express.json());

// Routes
app.use('/health', healthRouter);

// Error handling
app.use((err: Error, req: express.Request, res: express.Response, next: express.NextFunction) => {
  console.error(err.stack);
  res.status(500).json({ error: 'Something went wrong!' });
});

app.listen(port, () => {
  console.log(`{{projectName}} API server is running on port ${port}`);
});

export default app;"#;

const HEALTH_ROUTE: &str = r#"import { Router } from 'express';

const router = Router();

router.get('/', (req, res) => {
  res.json({
    status: 'healthy',
    timestamp: new Date().toISOString(),
    service: '{{projectName}}',
    version: '1.0.0'
  });
});

router.get('/ready', (req, res) => {
  // Add readiness checks here (database, external services, etc.)
  res.json({
    status: 'ready',
    timestamp: new Date().toISOString()
  });
});

export { router as healthRouter };"#;

const CORS_MIDDLEWARE: &str = r#"import cors from 'cors';

export const corsConfig = cors({
  origin: process.env.ALLOWED_ORIGINS?.split(',') || ['http://localhost:3000'],
  methods: ['GET', 'POST', 'PUT', 'DELETE', 'PATCH'],
  allowedHeaders: ['Content-Type', 'Authorization'],
  credentials: true
});"#;

// ── Shared container + deployment files ───────────────────────────────────

const NODE_DOCKERFILE: &str = r#"FROM node:18-alpine

WORKDIR /app

# Copy package files
COPY package*.json ./

# Install dependencies
RUN npm ci --only=production

# Copy source code
COPY . .

# Build the application
RUN npm run build

# Expose port
EXPOSE 3000

# Health check
HEALTHCHECK --interval=30s --timeout=3s --start-period=5s --retries=3 \
  CMD curl -f http://localhost:3000/health || exit 1

# Start the application
CMD ["npm", "start"]"#;

const DOCKER_COMPOSE: &str = r#"version: '3.8'

services:
  {{projectName}}:
    build: .
    ports:
      - "3000:3000"
    environment:
      - NODE_ENV=development
      - REDIS_URL=redis://redis:6379
    depends_on:
      - redis
    volumes:
      - .:/app
      - /app/node_modules

  redis:
    image: redis:7-alpine
    ports:
      - "6379:6379"
    volumes:
      - redis_data:/data

volumes:
  redis_data:"#;

const K8S_DEPLOYMENT: &str = r#"apiVersion: apps/v1
kind: Deployment
metadata:
  name: {{projectName}}
  labels:
    app: {{projectName}}
spec:
  replicas: 2
  selector:
    matchLabels:
      app: {{projectName}}
  template:
    metadata:
      labels:
        app: {{projectName}}
    spec:
      containers:
      - name: {{projectName}}
        image: buttonops.azurecr.io/{{projectName}}:latest
        ports:
        - containerPort: 3000
        env:
        - name: NODE_ENV
          value: "{{environment}}"
        - name: REDIS_URL
          value: "redis://{{projectName}}-{{environment}}-redis:6379"
        livenessProbe:
          httpGet:
            path: /health
            port: 3000
          initialDelaySeconds: 30
          periodSeconds: 10
        readinessProbe:
          httpGet:
            path: /health/ready
            port: 3000
          initialDelaySeconds: 5
          periodSeconds: 5
        resources:
          requests:
            memory: "64Mi"
            cpu: "50m"
          limits:
            memory: "128Mi"
            cpu: "100m""#;

const K8S_SERVICE: &str = r#"apiVersion: v1
kind: Service
metadata:
  name: {{projectName}}
  labels:
    app: {{projectName}}
spec:
  selector:
    app: {{projectName}}
  ports:
  - port: 80
    targetPort: 3000
  type: ClusterIP"#;

const K8S_INGRESS: &str = r#"apiVersion: networking.k8s.io/v1
kind: Ingress
metadata:
  name: {{projectName}}
  annotations:
    kubernetes.io/ingress.class: "azure/application-gateway"
spec:
  rules:
  - host: {{projectName}}-{{environment}}.buttonops.dev
    http:
      paths:
      - path: /
        pathType: Prefix
        backend:
          service:
            name: {{projectName}}
            port:
              number: 80"#;

const HELM_CHART: &str = r#"apiVersion: v2
name: {{projectName}}
description: A Helm chart for {{projectName}}
type: application
version: 0.1.0
appVersion: "1.0.0""#;

const HELM_VALUES: &str = r#"replicaCount: 2

image:
  repository: buttonops.azurecr.io/{{projectName}}
  pullPolicy: IfNotPresent
  tag: "latest"

service:
  type: ClusterIP
  port: 80

ingress:
  enabled: true
  className: "azure/application-gateway"
  annotations: {}
  hosts:
    - host: {{projectName}}.buttonops.dev
      paths:
        - path: /
          pathType: Prefix
  tls: []

resources:
  limits:
    cpu: 100m
    memory: 128Mi
  requests:
    cpu: 50m
    memory: 64Mi

autoscaling:
  enabled: false
  minReplicas: 1
  maxReplicas: 100
  targetCPUUtilizationPercentage: 80

nodeSelector: {}

tolerations: []

affinity: {}"#;

const HELM_VALUES_DEV: &str = r#"replicaCount: 1

image:
  tag: "dev"

ingress:
  hosts:
    - host: {{projectName}}-dev.buttonops.dev
      paths:
        - path: /
          pathType: Prefix

resources:
  limits:
    cpu: 50m
    memory: 64Mi
  requests:
    cpu: 25m
    memory: 32Mi"#;

const HELM_VALUES_QA: &str = r#"replicaCount: 1

image:
  tag: "qa"

ingress:
  hosts:
    - host: {{projectName}}-qa.buttonops.dev
      paths:
        - path: /
          pathType: Prefix"#;

const HELM_VALUES_PROD: &str = r#"replicaCount: 3

image:
  tag: "prod"

ingress:
  hosts:
    - host: {{projectName}}.buttonops.dev
      paths:
        - path: /
          pathType: Prefix

autoscaling:
  enabled: true
  minReplicas: 3
  maxReplicas: 10
  targetCPUUtilizationPercentage: 70"#;

// The inner {{projectName}} is ours; the outer braces belong to Helm and are
// rewritten along with it during rendering.
const HELM_DEPLOYMENT_TEMPLATE: &str = r#"{{- include "{{projectName}}.deployment" . -}}"#;

const HELM_SERVICE_TEMPLATE: &str = r#"{{- include "{{projectName}}.service" . -}}"#;

const HELM_INGRESS_TEMPLATE: &str = r#"{{- include "{{projectName}}.ingress" . -}}"#;

// ── GraphQL ───────────────────────────────────────────────────────────────

const GRAPHQL_PACKAGE_JSON: &str = r#"{
  "name": "{{projectName}}",
  "version": "1.0.0",
  "description": "{{projectName}} GraphQL API",
  "main": "dist/app.js",
  "dependencies": {
    "apollo-server-express": "^3.12.1",
    "graphql": "^16.8.1",
    "express": "^4.18.2"
  }
}"#;

const GRAPHQL_APP: &str = r#"import { ApolloServer } from 'apollo-server-express';
import express from 'express';
import { typeDefs } from './schema';
import { resolvers } from './resolvers';

async function startServer() {
  const app = express();

  const server = new ApolloServer({
    typeDefs,
    resolvers,
  });

  await server.start();
  server.applyMiddleware({ app });

  const port = process.env.PORT || 4000;
  app.listen(port, () => {
    console.log(`{{projectName}} GraphQL server running at http://localhost:${port}${server.graphqlPath}`);
  });
}

startServer().catch(error => {
  console.error('Error starting server:', error);
});"#;

const GRAPHQL_SCHEMA: &str = r#"import { gql } from 'apollo-server-express';

export const typeDefs = gql`
  type Query {
    hello: String
  }
`;"#;

const GRAPHQL_RESOLVERS: &str = r#"export const resolvers = {
  Query: {
    hello: () => 'Hello from {{projectName}} GraphQL API!',
  },
};"#;

// ── Worker ────────────────────────────────────────────────────────────────

const WORKER_PACKAGE_JSON: &str = r#"{
  "name": "{{projectName}}",
  "version": "1.0.0",
  "description": "{{projectName}} Background Worker",
  "main": "dist/worker.js",
  "dependencies": {
    "bull": "^4.12.2",
    "redis": "^4.6.10"
  }
}"#;

const WORKER_APP: &str = r#"import Queue from 'bull';
import { emailJob } from './jobs/email';

const emailQueue = new Queue('email', process.env.REDIS_URL || 'redis://localhost:6379');

emailQueue.process(emailJob);

console.log('{{projectName}} worker started');"#;

const EMAIL_JOB: &str = r#"export const emailJob = async (job: any) => {
  console.log('Processing email job:', job.data);
  // Add email processing logic here
  return { success: true };
};"#;

// ── Frontend ──────────────────────────────────────────────────────────────

const FRONTEND_PACKAGE_JSON: &str = r#"{
  "name": "{{projectName}}",
  "version": "1.0.0",
  "description": "{{projectName}} frontend",
  "scripts": {
    "dev": "vite",
    "build": "tsc && vite build",
    "preview": "vite preview"
  },
  "dependencies": {
    "react": "^18.2.0",
    "react-dom": "^18.2.0"
  },
  "devDependencies": {
    "@types/react": "^18.2.37",
    "@types/react-dom": "^18.2.15",
    "@vitejs/plugin-react": "^4.2.0",
    "typescript": "^5.2.2",
    "vite": "^5.0.0"
  }
}"#;

const FRONTEND_INDEX_HTML: &str = r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>{{projectName}}</title>
  </head>
  <body>
    <div id="root"></div>
    <script type="module" src="/src/main.tsx"></script>
  </body>
</html>"#;

const FRONTEND_MAIN: &str = r#"import React from 'react';
import ReactDOM from 'react-dom/client';
import App from './App';

ReactDOM.createRoot(document.getElementById('root')!).render(
  <React.StrictMode>
    <App />
  </React.StrictMode>,
);"#;

const FRONTEND_APP: &str = r#"function App() {
  return (
    <main>
      <h1>{{projectName}}</h1>
      <p>Environment: {{environment}}</p>
    </main>
  );
}

export default App;"#;

const FRONTEND_NGINX_CONF: &str = r#"server {
  listen 3000;
  server_name _;

  root /usr/share/nginx/html;
  index index.html;

  location / {
    try_files $uri $uri/ /index.html;
  }

  location /health {
    access_log off;
    return 200 'healthy';
    add_header Content-Type text/plain;
  }
}"#;

const FRONTEND_DOCKERFILE: &str = r#"FROM node:18-alpine AS build

WORKDIR /app

COPY package*.json ./
RUN npm ci

COPY . .
RUN npm run build

FROM nginx:1.25-alpine

COPY nginx.conf /etc/nginx/conf.d/default.conf
COPY --from=build /app/dist /usr/share/nginx/html

EXPOSE 3000

HEALTHCHECK --interval=30s --timeout=3s --start-period=5s --retries=3 \
  CMD wget -q --spider http://localhost:3000/health || exit 1"#;

const FRONTEND_DOCKER_COMPOSE: &str = r#"version: '3.8'

services:
  {{projectName}}:
    build: .
    ports:
      - "3000:3000""#;

// ── Shared docs + ignore files ────────────────────────────────────────────

const PROJECT_README: &str = r#"# {{projectName}}

A {{projectType}} service created with ButtonOps.

## Getting Started

### Prerequisites
- Node.js 18+
- Docker
- Kubernetes cluster (for deployment)

### Development
```bash
npm install
npm run dev
```

### Docker
```bash
docker build -t {{projectName}} .
docker run -p 3000:3000 {{projectName}}
```

### Deployment
```bash
# Deploy to {{environment}}
./scripts/deploy.sh
```

## API Documentation

Health check: `GET /health`

## Environment Variables

- `NODE_ENV`: Environment (development, qa, production)
- `PORT`: Server port (default: 3000)
- `REDIS_URL`: Redis connection URL

## Monitoring

- Health check: `/health`
- Readiness check: `/health/ready`
- Metrics: `/metrics`

Generated by ButtonOps on {{timestamp}}"#;

const GITIGNORE: &str = r#"node_modules/
dist/
.env
.env.local
.env.*.local
npm-debug.log*
yarn-debug.log*
yarn-error.log*
.DS_Store
.vscode/
.idea/
*.log"#;

const DOCKERIGNORE: &str = r#"node_modules
npm-debug.log
.git
.gitignore
README.md
.env
.nyc_output
coverage
.vscode"#;
